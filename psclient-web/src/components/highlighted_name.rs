use psclient_core::Segment;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub segments: Vec<Segment>,
}

fn segment_html(segment: &Segment) -> Html {
    match segment {
        Segment::Plain(text) | Segment::Dim(text) => html! { {text.clone()} },
        Segment::Emphasized(text) | Segment::DimEmphasized(text) => html! { <b>{text.clone()}</b> },
    }
}

/// A name with its match in bold and its tag in a single `<small>` run.
#[function_component(HighlightedName)]
pub fn highlighted_name(props: &Props) -> Html {
    let mut nodes = Vec::new();
    let mut dim_run = Vec::new();
    for segment in &props.segments {
        if segment.is_dim() {
            dim_run.push(segment_html(segment));
            continue;
        }
        if !dim_run.is_empty() {
            nodes.push(html! { <small>{ for dim_run.drain(..) }</small> });
        }
        nodes.push(segment_html(segment));
    }
    if !dim_run.is_empty() {
        nodes.push(html! { <small>{ for dim_run }</small> });
    }
    html! { <>{ for nodes }</> }
}
