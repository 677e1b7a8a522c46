//! Row dispatch: turns search rows into typed row view models.
//!
//! Every [`ResultKind`] has one builder. A row whose entity cannot be found
//! becomes [`RowView::Unrecognized`]; a row of an unknown kind becomes
//! [`RowView::NotFound`]. Neither aborts the list.

use crate::dex::{DexLookup, MoveCategory, Species};
use crate::highlight::{Segment, highlight};
use crate::html::sanitize_row_html;
use crate::names::{capitalize, egg_group_name, is_search_type_article, tier_name};
use crate::search::{MAX_VISIBLE_ROWS, ResultKind, RowKind, SearchQuery, SearchRow, SortColumn};

/// Annotation replacing a row's detail columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowLabel {
    /// The row's kind is excluded by the active filters.
    Filter(String),
    /// The row's entity is not allowed in the active format.
    Illegal(String),
}

impl RowLabel {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Filter(text) | Self::Illegal(text) => text,
        }
    }
}

/// Either the kind-specific columns or the label shown instead of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowTail<T> {
    Detail(T),
    Label(RowLabel),
}

impl<T> RowTail<T> {
    fn from_label(label: Option<RowLabel>, detail: impl FnOnce() -> T) -> Self {
        label.map_or_else(|| Self::Detail(detail()), Self::Label)
    }
}

/// Dex page a row links to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryLink {
    /// Path below the dex root, such as `pokemon/pikachu`.
    pub path: String,
    /// `kind|Name` pair identifying the entry.
    pub entry: String,
}

impl EntryLink {
    fn new(section: &str, id: &str, kind: &str, name: &str) -> Self {
        Self {
            path: format!("{section}/{id}"),
            entry: format!("{kind}|{name}"),
        }
    }
}

/// An ability column: one or two lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbilityCell {
    pub lines: Vec<String>,
    pub unreleased: bool,
}

impl AbilityCell {
    #[must_use]
    pub fn is_double(&self) -> bool {
        self.lines.len() > 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCell {
    pub label: &'static str,
    pub value: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokemonDetail {
    pub types: Vec<String>,
    /// Regular abilities, shown from gen 3.
    pub abilities: Option<AbilityCell>,
    /// Hidden and special abilities, shown from gen 5.
    pub hidden_abilities: Option<AbilityCell>,
    pub stats: Vec<StatCell>,
    pub bst: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokemonRow {
    pub id: String,
    pub num: i32,
    pub link: EntryLink,
    pub tier: String,
    pub name: Vec<Segment>,
    pub tail: RowTail<PokemonDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveDetail {
    pub move_type: String,
    pub category: MoveCategory,
    /// `None` for status moves.
    pub power: Option<String>,
    pub accuracy: String,
    pub pp: u16,
    pub short_desc: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRow {
    pub link: EntryLink,
    pub name: Vec<Segment>,
    pub tail: RowTail<MoveDetail>,
}

/// Item and ability rows: a name and a short description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribedRow {
    pub link: EntryLink,
    pub name: Vec<Segment>,
    pub tail: RowTail<String>,
    /// Sprite sheet index, for items.
    pub sprite: Option<u32>,
}

/// Rows whose name is derived from the id; the label trails the row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedRow {
    pub link: EntryLink,
    pub display_name: String,
    pub name: Vec<Segment>,
    /// `(egg group)`, `(tier)`, `(article)` or `(search type)`.
    pub note: Option<&'static str>,
    pub label: Option<RowLabel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortButton {
    pub class: &'static str,
    pub column: SortColumn,
    pub text: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortRowView {
    /// Caption of the leading button when it is not a sort column.
    pub lead: Option<String>,
    pub lead_current: bool,
    pub buttons: Vec<(SortButton, bool)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowView {
    Html(String),
    Header(String),
    SortPokemon(SortRowView),
    SortMove(SortRowView),
    Pokemon(PokemonRow),
    Move(MoveRow),
    Item(DescribedRow),
    Ability(DescribedRow),
    Type(NamedRow),
    Category(NamedRow),
    EggGroup(NamedRow),
    Tier(NamedRow),
    Article(NamedRow),
    /// The entity id has no dex entry.
    Unrecognized(ResultKind),
    /// The row kind itself is unknown.
    NotFound,
}

const POKEMON_SORT_BUTTONS: [SortButton; 10] = [
    SortButton { class: "pnamesortcol", column: SortColumn::Name, text: "Name" },
    SortButton { class: "typesortcol", column: SortColumn::Type, text: "Types" },
    SortButton { class: "abilitysortcol", column: SortColumn::Ability, text: "Abilities" },
    SortButton { class: "statsortcol", column: SortColumn::Hp, text: "HP" },
    SortButton { class: "statsortcol", column: SortColumn::Atk, text: "Atk" },
    SortButton { class: "statsortcol", column: SortColumn::Def, text: "Def" },
    SortButton { class: "statsortcol", column: SortColumn::Spa, text: "SpA" },
    SortButton { class: "statsortcol", column: SortColumn::Spd, text: "SpD" },
    SortButton { class: "statsortcol", column: SortColumn::Spe, text: "Spe" },
    SortButton { class: "statsortcol", column: SortColumn::Bst, text: "BST" },
];

const MOVE_SORT_BUTTONS: [SortButton; 6] = [
    SortButton { class: "movenamesortcol", column: SortColumn::Name, text: "Name" },
    SortButton { class: "movetypesortcol", column: SortColumn::Type, text: "Type" },
    SortButton { class: "movetypesortcol", column: SortColumn::Category, text: "Cat" },
    SortButton { class: "powersortcol", column: SortColumn::Power, text: "Pow" },
    SortButton { class: "accuracysortcol", column: SortColumn::Accuracy, text: "Acc" },
    SortButton { class: "ppsortcol", column: SortColumn::Pp, text: "PP" },
];

/// Builds row view models for one search against one dex.
pub struct RowDispatcher<'a> {
    dex: &'a dyn DexLookup,
    search: &'a dyn SearchQuery,
}

impl<'a> RowDispatcher<'a> {
    #[must_use]
    pub fn new(dex: &'a dyn DexLookup, search: &'a dyn SearchQuery) -> Self {
        Self { dex, search }
    }

    /// View models for the rows the list shows.
    #[must_use]
    pub fn visible_rows(&self) -> Vec<RowView> {
        self.search
            .results()
            .iter()
            .take(MAX_VISIBLE_ROWS)
            .map(|row| self.build(row))
            .collect()
    }

    #[must_use]
    pub fn build(&self, row: &SearchRow) -> RowView {
        let kind = match &row.kind {
            RowKind::Known(kind) => *kind,
            RowKind::Unknown(kind) => {
                log::warn!("search row of unknown kind {kind:?} ({})", row.id);
                return RowView::NotFound;
            }
        };
        let label = self.label_for(kind, &row.id);
        let (id, start, end) = (row.id.as_str(), row.match_start, row.match_end);

        match kind {
            ResultKind::Html => RowView::Html(sanitize_row_html(id)),
            ResultKind::Header => RowView::Header(id.to_string()),
            ResultKind::SortPokemon => RowView::SortPokemon(self.pokemon_sort_row()),
            ResultKind::SortMove => RowView::SortMove(self.move_sort_row()),
            ResultKind::Pokemon => self.pokemon_row(id, start, end, label),
            ResultKind::Move => self.move_row(id, start, end, label),
            ResultKind::Item => self.item_row(id, start, end, label),
            ResultKind::Ability => self.ability_row(id, start, end, label),
            ResultKind::Type => {
                let name = capitalize(id);
                RowView::Type(named_row("types", "type", id, name, start, end, None, label))
            }
            ResultKind::Category => {
                let name = capitalize(id);
                RowView::Category(named_row(
                    "categories",
                    "category",
                    id,
                    name,
                    start,
                    end,
                    None,
                    label,
                ))
            }
            ResultKind::EggGroup => {
                let (name, end) = egg_group_name(id, end);
                RowView::EggGroup(named_row(
                    "egggroups",
                    "egggroup",
                    id,
                    name,
                    start,
                    end,
                    Some("(egg group)"),
                    label,
                ))
            }
            ResultKind::Tier => RowView::Tier(named_row(
                "tiers",
                "tier",
                id,
                tier_name(id),
                start,
                end,
                Some("(tier)"),
                label,
            )),
            ResultKind::Article => {
                let name = self
                    .dex
                    .article_title(id)
                    .map_or_else(|| capitalize(id), str::to_string);
                let note = if is_search_type_article(id) {
                    "(search type)"
                } else {
                    "(article)"
                };
                RowView::Article(named_row(
                    "articles",
                    "article",
                    id,
                    name,
                    start,
                    end,
                    Some(note),
                    label,
                ))
            }
        }
    }

    fn label_for(&self, kind: ResultKind, id: &str) -> Option<RowLabel> {
        self.search
            .filter_label(kind)
            .map(RowLabel::Filter)
            .or_else(|| self.search.illegal_label(id).map(RowLabel::Illegal))
    }

    fn pokemon_sort_row(&self) -> SortRowView {
        let sort = self.search.sort_column();
        let lead = if sort.is_none() {
            "Sort: ".to_string()
        } else {
            self.search.first_pokemon_column().to_string()
        };
        SortRowView {
            lead: Some(lead),
            lead_current: sort.is_none(),
            buttons: sort_buttons(&POKEMON_SORT_BUTTONS, sort),
        }
    }

    fn move_sort_row(&self) -> SortRowView {
        SortRowView {
            lead: None,
            lead_current: false,
            buttons: sort_buttons(&MOVE_SORT_BUTTONS, self.search.sort_column()),
        }
    }

    fn pokemon_row(&self, id: &str, start: usize, end: usize, label: Option<RowLabel>) -> RowView {
        let Some(species) = self.dex.species(id) else {
            log::warn!("unrecognized pokemon {id:?}");
            return RowView::Unrecognized(ResultKind::Pokemon);
        };
        let generation = self.dex.generation();
        RowView::Pokemon(PokemonRow {
            id: species.id.clone(),
            num: species.num,
            link: EntryLink::new("pokemon", id, "pokemon", &species.name),
            tier: self.search.tier(species),
            name: highlight(&species.name, start, end, species.tag_start()),
            tail: RowTail::from_label(label, || pokemon_detail(species, generation)),
        })
    }

    fn move_row(&self, id: &str, start: usize, end: usize, label: Option<RowLabel>) -> RowView {
        let Some(entry) = self.dex.move_entry(id) else {
            log::warn!("unrecognized move {id:?}");
            return RowView::Unrecognized(ResultKind::Move);
        };
        let generation = self.dex.generation();
        RowView::Move(MoveRow {
            link: EntryLink::new("move", id, "move", &entry.name),
            name: highlight(&entry.name, start, end, entry.tag_start()),
            tail: RowTail::from_label(label, || MoveDetail {
                move_type: entry.move_type.clone(),
                category: entry.category,
                power: (entry.category != MoveCategory::Status)
                    .then(|| entry.base_power.to_string()),
                accuracy: entry.accuracy.label(),
                pp: entry.display_pp(generation),
                short_desc: entry.short_desc.clone(),
            }),
        })
    }

    fn item_row(&self, id: &str, start: usize, end: usize, label: Option<RowLabel>) -> RowView {
        let Some(item) = self.dex.item(id) else {
            log::warn!("unrecognized item {id:?}");
            return RowView::Unrecognized(ResultKind::Item);
        };
        RowView::Item(DescribedRow {
            link: EntryLink::new("items", id, "item", &item.name),
            name: highlight(&item.name, start, end, None),
            tail: RowTail::from_label(label, || item.short_desc.clone()),
            sprite: Some(item.spritenum),
        })
    }

    fn ability_row(&self, id: &str, start: usize, end: usize, label: Option<RowLabel>) -> RowView {
        let Some(ability) = self.dex.ability(id) else {
            log::warn!("unrecognized ability {id:?}");
            return RowView::Unrecognized(ResultKind::Ability);
        };
        RowView::Ability(DescribedRow {
            link: EntryLink::new("abilitys", id, "ability", &ability.name),
            name: highlight(&ability.name, start, end, None),
            tail: RowTail::from_label(label, || ability.short_desc.clone()),
            sprite: None,
        })
    }
}

fn sort_buttons(buttons: &[SortButton], sort: Option<SortColumn>) -> Vec<(SortButton, bool)> {
    buttons
        .iter()
        .map(|button| (*button, sort == Some(button.column)))
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn named_row(
    section: &str,
    kind: &str,
    id: &str,
    name: String,
    start: usize,
    end: usize,
    note: Option<&'static str>,
    label: Option<RowLabel>,
) -> NamedRow {
    NamedRow {
        link: EntryLink::new(section, id, kind, &name),
        name: highlight(&name, start, end, None),
        display_name: name,
        note,
        label,
    }
}

fn pokemon_detail(species: &Species, generation: u8) -> PokemonDetail {
    let abilities = &species.abilities;
    let regular = (generation >= 3).then(|| {
        let mut lines = vec![abilities.primary.clone()];
        lines.extend(abilities.secondary.clone());
        AbilityCell {
            lines,
            unreleased: false,
        }
    });
    let hidden = (generation >= 5).then(|| match (&abilities.hidden, &abilities.special) {
        (hidden, Some(special)) => AbilityCell {
            lines: vec![hidden.clone().unwrap_or_default(), special.clone()],
            unreleased: species.unreleased_hidden,
        },
        (Some(hidden), None) => AbilityCell {
            lines: vec![hidden.clone()],
            unreleased: species.unreleased_hidden,
        },
        (None, None) => AbilityCell::default(),
    });

    let stats = &species.base_stats;
    let mut cells = vec![
        StatCell { label: "HP", value: stats.hp },
        StatCell { label: "Atk", value: stats.atk },
        StatCell { label: "Def", value: stats.def },
    ];
    if generation > 2 {
        cells.push(StatCell { label: "SpA", value: stats.spa });
        cells.push(StatCell { label: "SpD", value: stats.spd });
    }
    if generation < 2 {
        cells.push(StatCell { label: "Spc", value: stats.spa });
    }
    cells.push(StatCell { label: "Spe", value: stats.spe });

    PokemonDetail {
        types: species.types.clone(),
        abilities: regular,
        hidden_abilities: hidden,
        stats: cells,
        bst: stats.total(generation),
    }
}
