use crate::components::highlighted_name::HighlightedName;
use psclient_core::ClientConfig;
use psclient_core::rows::{
    AbilityCell, DescribedRow, EntryLink, MoveDetail, MoveRow, NamedRow, PokemonDetail,
    PokemonRow, RowLabel, RowTail, RowView, SortRowView,
};
use psclient_core::search::SortColumn;
use yew::prelude::*;

pub(super) fn render_row(
    row: &RowView,
    config: &ClientConfig,
    on_sort: &Callback<SortColumn>,
) -> Html {
    match row {
        RowView::Html(markup) => html! {
            <li class="result"><p>{ Html::from_html_unchecked(AttrValue::from(markup.clone())) }</p></li>
        },
        RowView::Header(text) => html! { <li class="result"><h3>{ text.clone() }</h3></li> },
        RowView::SortPokemon(view) => sort_row(view, Some("numsortcol"), on_sort),
        RowView::SortMove(view) => sort_row(view, None, on_sort),
        RowView::Pokemon(row) => pokemon_row(row, config),
        RowView::Move(row) => move_row(row, config),
        RowView::Item(row) => described_row(row, config, "itemdesccol"),
        RowView::Ability(row) => described_row(row, config, "abilitydesccol"),
        RowView::Type(row) => named_row(row, config, Some(config.type_sprite(&row.display_name))),
        RowView::Category(row) => {
            named_row(row, config, Some(config.category_sprite(&row.display_name)))
        }
        RowView::EggGroup(row) | RowView::Tier(row) | RowView::Article(row) => {
            named_row(row, config, None)
        }
        RowView::Unrecognized(kind) => html! { <li class="result">{ format!("Unrecognized {kind}") }</li> },
        RowView::NotFound => html! { <li>{"Error: not found"}</li> },
    }
}

fn sort_row(
    view: &SortRowView,
    lead_class: Option<&'static str>,
    on_sort: &Callback<SortColumn>,
) -> Html {
    let lead = view.lead.as_ref().map(|text| {
        let class = classes!("sortcol", lead_class, view.lead_current.then_some("cur"));
        html! { <button {class}>{ text.clone() }</button> }
    });
    let buttons = view.buttons.iter().map(|(button, current)| {
        let class = classes!("sortcol", button.class, current.then_some("cur"));
        let column = button.column;
        let onclick = {
            let cb = on_sort.clone();
            Callback::from(move |_: MouseEvent| cb.emit(column))
        };
        html! {
            <button {class} data-sort={column.as_str()} {onclick}>{ button.text }</button>
        }
    });
    html! {
        <li class="result"><div class="sortrow">{ lead }{ for buttons }</div></li>
    }
}

fn link(entry: &EntryLink, config: &ClientConfig, children: Html) -> Html {
    html! {
        <li class="result">
            <a href={config.dex_url(&entry.path)} data-target="push" data-entry={entry.entry.clone()}>
                { children }
            </a>
        </li>
    }
}

fn label_html(label: &RowLabel) -> Html {
    let class = match label {
        RowLabel::Filter(_) => "col filtercol",
        RowLabel::Illegal(_) => "col illegalcol",
    };
    html! { <span {class}><em>{ label.text().to_string() }</em></span> }
}

fn type_icon(src: String, alt: &str) -> Html {
    html! { <img {src} alt={alt.to_string()} height="14" width="32" class="pixelated" /> }
}

fn ability_cell(cell: &AbilityCell) -> Html {
    let class = classes!(
        "col",
        if cell.is_double() { "twoabilitycol" } else { "abilitycol" },
        cell.unreleased.then_some("unreleasedhacol")
    );
    let lines = cell.lines.iter().enumerate().map(|(i, line)| {
        html! { <>{ (i > 0).then(|| html! { <br /> }) }{ line.clone() }</> }
    });
    html! { <span {class}>{ for lines }</span> }
}

fn pokemon_detail(detail: &PokemonDetail, config: &ClientConfig) -> Html {
    html! {
        <>
            <span class="col typecol">
                { for detail.types.iter().map(|t| type_icon(config.type_sprite(t), t)) }
            </span>
            { detail.abilities.as_ref().map(ability_cell) }
            { detail.hidden_abilities.as_ref().map(ability_cell) }
            { for detail.stats.iter().map(|stat| html! {
                <span class="col statcol"><em>{ stat.label }</em><br />{ stat.value.to_string() }</span>
            }) }
            <span class="col bstcol"><em>{"BST"}<br />{ detail.bst.to_string() }</em></span>
        </>
    }
}

fn pokemon_row(row: &PokemonRow, config: &ClientConfig) -> Html {
    let tail = match &row.tail {
        RowTail::Detail(detail) => pokemon_detail(detail, config),
        RowTail::Label(label) => label_html(label),
    };
    link(
        &row.link,
        config,
        html! {
            <>
                <span class="col numcol">{ row.tier.clone() }</span>
                <span class="col iconcol">
                    <span style={config.pokemon_icon_style(row.num)}></span>
                </span>
                <span class="col pokemonnamecol"><HighlightedName segments={row.name.clone()} /></span>
                { tail }
            </>
        },
    )
}

fn move_detail(detail: &MoveDetail, config: &ClientConfig) -> Html {
    let category = detail.category.as_str();
    html! {
        <>
            <span class="col typecol">
                { type_icon(config.type_sprite(&detail.move_type), &detail.move_type) }
                { type_icon(config.category_sprite(category), category) }
            </span>
            <span class="col labelcol">
                { detail.power.as_ref().map(|power| html! { <><em>{"Power"}</em><br />{ power.clone() }</> }) }
            </span>
            <span class="col widelabelcol">
                <em>{"Accuracy"}</em><br />{ detail.accuracy.clone() }
            </span>
            <span class="col pplabelcol">
                <em>{"PP"}</em><br />{ detail.pp.to_string() }
            </span>
            <span class="col movedesccol">{ detail.short_desc.clone() }</span>
        </>
    }
}

fn move_row(row: &MoveRow, config: &ClientConfig) -> Html {
    let tail = match &row.tail {
        RowTail::Detail(detail) => move_detail(detail, config),
        RowTail::Label(label) => label_html(label),
    };
    link(
        &row.link,
        config,
        html! {
            <>
                <span class="col movenamecol"><HighlightedName segments={row.name.clone()} /></span>
                { tail }
            </>
        },
    )
}

fn described_row(row: &DescribedRow, config: &ClientConfig, desc_class: &'static str) -> Html {
    let icon = row.sprite.map(|num| {
        html! {
            <span class="col itemiconcol"><span style={config.item_icon_style(num)}></span></span>
        }
    });
    let tail = match &row.tail {
        RowTail::Detail(desc) => html! { <span class={classes!("col", desc_class)}>{ desc.clone() }</span> },
        RowTail::Label(label) => label_html(label),
    };
    link(
        &row.link,
        config,
        html! {
            <>
                { icon }
                <span class="col namecol"><HighlightedName segments={row.name.clone()} /></span>
                { tail }
            </>
        },
    )
}

fn named_row(row: &NamedRow, config: &ClientConfig, sprite: Option<String>) -> Html {
    link(
        &row.link,
        config,
        html! {
            <>
                <span class="col namecol"><HighlightedName segments={row.name.clone()} /></span>
                { sprite.map(|src| html! {
                    <span class="col typecol">{ type_icon(src, &row.display_name) }</span>
                }) }
                { row.note.map(|note| html! { <span class="col movedesccol">{ note }</span> }) }
                { row.label.as_ref().map(label_html) }
            </>
        },
    )
}
