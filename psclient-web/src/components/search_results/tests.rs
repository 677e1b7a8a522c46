use super::*;
use futures::executor::block_on;
use psclient_core::dex::{Abilities, BaseStats, Dex, Item, Move, MoveCategory, Species};
use psclient_core::search::{Filter, SearchRow, SearchSnapshot};
use psclient_core::ResultKind;
use yew::LocalServerRenderer;

fn dex() -> Rc<dyn DexLookup> {
    Rc::new(
        Dex::empty(9)
            .with_species(Species {
                id: "pikachu".into(),
                name: "Pikachu".into(),
                num: 25,
                types: vec!["Electric".into()],
                abilities: Abilities {
                    primary: "Static".into(),
                    hidden: Some("Lightning Rod".into()),
                    ..Abilities::default()
                },
                base_stats: BaseStats {
                    hp: 35,
                    atk: 55,
                    def: 40,
                    spa: 50,
                    spd: 50,
                    spe: 90,
                },
                tier: Some("ZU".into()),
                ..Species::default()
            })
            .with_move(Move {
                id: "thunderbolt".into(),
                name: "Thunderbolt".into(),
                move_type: "Electric".into(),
                category: MoveCategory::Special,
                base_power: 90,
                pp: 15,
                short_desc: "10% chance to paralyze the target.".into(),
                ..Move::default()
            })
            .with_item(Item {
                id: "leftovers".into(),
                name: "Leftovers".into(),
                spritenum: 242,
                short_desc: "Heals 1/16 max HP each turn.".into(),
            }),
    )
}

fn render(search: SearchSnapshot) -> String {
    let props = Props {
        dex: dex(),
        search: Rc::new(search),
        config: Rc::new(ClientConfig::default()),
        on_remove_filter: Callback::noop(),
        on_sort: Callback::noop(),
    };
    block_on(LocalServerRenderer::<SearchResults>::with_props(props).render())
}

fn snapshot(rows: Vec<SearchRow>) -> SearchSnapshot {
    SearchSnapshot {
        results: rows,
        ..SearchSnapshot::default()
    }
}

#[test]
fn pokemon_row_renders_stats_and_link() {
    let html = render(snapshot(vec![
        SearchRow::new(ResultKind::Pokemon, "pikachu").with_match(0, 4),
    ]));
    assert!(html.contains(r#"<ul class="dexlist">"#));
    assert!(html.contains("//dex.pokemonshowdown.com/pokemon/pikachu"));
    assert!(html.contains(r#"data-entry="pokemon|Pikachu""#));
    assert!(html.contains("<b>Pika</b>chu"));
    assert!(html.contains("ZU"));
    assert!(html.contains("Lightning Rod"));
    assert!(html.contains("320"));
}

#[test]
fn move_row_shows_category_and_power() {
    let html = render(snapshot(vec![SearchRow::new(ResultKind::Move, "thunderbolt")]));
    assert!(html.contains("movenamecol"));
    assert!(html.contains("categories/Special.png"));
    assert!(html.contains("Power"));
    assert!(html.contains("90"));
    assert!(html.contains("10% chance to paralyze"));
}

#[test]
fn item_row_carries_its_icon() {
    let html = render(snapshot(vec![SearchRow::new(ResultKind::Item, "leftovers")]));
    assert!(html.contains("itemiconcol"));
    assert!(html.contains("itemicons-sheet.png"));
    assert!(html.contains("Heals 1/16"));
}

#[test]
fn unknown_entries_do_not_abort_the_list() {
    let html = render(snapshot(vec![
        SearchRow::new(ResultKind::Item, "notanitem"),
        SearchRow::from_value(&serde_json::json!(["nature", "adamant"])).unwrap(),
        SearchRow::new(ResultKind::Header, "Moves"),
    ]));
    assert!(html.contains("Unrecognized item"));
    assert!(html.contains("Error: not found"));
    assert!(html.contains("<h3>Moves</h3>"));
}

#[test]
fn filters_show_remove_buttons_and_hint() {
    let mut search = snapshot(vec![]);
    search.filters = vec![Filter::new("type", "Fire")];
    let html = render(search.clone());
    assert!(html.contains("Filters: "));
    assert!(html.contains(r#"value="type:Fire""#));
    assert!(html.contains("(backspace = delete filter)"));

    search.query = "char".into();
    assert!(!render(search).contains("backspace"));
}

#[test]
fn no_filter_line_without_filters() {
    assert!(!render(snapshot(vec![])).contains("Filters"));
}

#[test]
fn sort_row_marks_current_column() {
    let mut search = snapshot(vec![SearchRow::new(ResultKind::SortMove, "")]);
    search.sort_column = Some(SortColumn::Power);
    let html = render(search);
    assert!(html.contains(r#"data-sort="power""#));
    assert!(html.contains("powersortcol cur"));
}

#[test]
fn props_compare_by_pointer() {
    let shared_dex = dex();
    let search: Rc<dyn SearchQuery> = Rc::new(SearchSnapshot::default());
    let config = Rc::new(ClientConfig::default());
    let a = Props {
        dex: Rc::clone(&shared_dex),
        search: Rc::clone(&search),
        config: Rc::clone(&config),
        on_remove_filter: Callback::noop(),
        on_sort: Callback::noop(),
    };
    let b = Props {
        dex: dex(),
        ..a.clone()
    };
    assert!(a == a.clone());
    assert!(a != b);
}
