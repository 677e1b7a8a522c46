mod rows;
#[cfg(test)]
mod tests;

use psclient_core::rows::RowDispatcher;
use psclient_core::search::{SearchQuery, SortColumn};
use psclient_core::{ClientConfig, DexLookup};
use rows::render_row;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, Clone)]
pub struct Props {
    pub dex: Rc<dyn DexLookup>,
    pub search: Rc<dyn SearchQuery>,
    pub config: Rc<ClientConfig>,
    /// Receives a filter's `kind:name` value.
    #[prop_or_default]
    pub on_remove_filter: Callback<String>,
    #[prop_or_default]
    pub on_sort: Callback<SortColumn>,
}

impl PartialEq for Props {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.dex, &other.dex)
            && Rc::ptr_eq(&self.search, &other.search)
            && Rc::ptr_eq(&self.config, &other.config)
            && self.on_remove_filter == other.on_remove_filter
            && self.on_sort == other.on_sort
    }
}

#[function_component(SearchResults)]
pub fn search_results(p: &Props) -> Html {
    let dispatcher = RowDispatcher::new(p.dex.as_ref(), p.search.as_ref());
    let filters = p.search.filters();

    let filter_bar = (!filters.is_empty()).then(|| {
        let buttons = filters.iter().map(|filter| {
            let value = filter.value();
            let onclick = {
                let cb = p.on_remove_filter.clone();
                let value = value.clone();
                Callback::from(move |_: MouseEvent| cb.emit(value.clone()))
            };
            html! {
                <button class="filter" {value} {onclick}>
                    { filter.name.clone() }{" "}<i class="fa fa-times-circle"></i>
                </button>
            }
        });
        html! {
            <p>
                {"Filters: "}
                { for buttons }
                { p.search.query().is_empty().then(|| html! {
                    <small style="color: #888">{"(backspace = delete filter)"}</small>
                }) }
            </p>
        }
    });

    html! {
        <ul class="dexlist">
            { filter_bar }
            { for dispatcher.visible_rows().iter().map(|row| render_row(row, &p.config, &p.on_sort)) }
        </ul>
    }
}
