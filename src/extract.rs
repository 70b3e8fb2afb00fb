use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};

use crate::{
    color::CardColor,
    consts::{CARD_COUNT_SELECTOR, CARD_NAME_SELECTOR, DECKLIST_SELECTOR, LAND_SELECTOR, ROW_SELECTOR},
    data::{CategoryMap, ExclusionSet, Extraction, FrequencyMap},
    error::ExtractionError,
};

// all selectors here are constants, parsing them cannot fail
fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}

fn text_of(ele: ElementRef) -> String {
    ele.text().collect()
}

/// Tally every decklist on the page and sort the cards by color.
///
/// Lands are reported in [`Extraction::lands`] but are still counted, call
/// [`Extraction::without_lands`] before rendering.
pub fn extract(html: &Html) -> Result<Extraction, ExtractionError> {
    let frequencies = count_cards(html)?;
    let categories = collect_categories(html);
    let lands = collect_lands(html);
    info!(
        cards = frequencies.len(),
        lands = lands.len(),
        "extracted decklists"
    );
    Ok(Extraction {
        frequencies,
        categories,
        lands,
    })
}

fn count_cards(html: &Html) -> Result<FrequencyMap, ExtractionError> {
    let containers = selector(DECKLIST_SELECTOR);
    let rows = selector(ROW_SELECTOR);
    let names = selector(CARD_NAME_SELECTOR);
    let counts = selector(CARD_COUNT_SELECTOR);

    let mut frequencies = FrequencyMap::new();
    let mut decklists = 0;
    for decklist in html.select(&containers) {
        decklists += 1;
        for row in decklist.select(&rows) {
            let name = row
                .select(&names)
                .next()
                .map(text_of)
                .ok_or(ExtractionError::MissingField("card name"))?;
            let count = row
                .select(&counts)
                .next()
                .map(text_of)
                .ok_or(ExtractionError::MissingField("card count"))?;
            let copies: u32 = count
                .trim()
                .parse()
                .map_err(|_| ExtractionError::BadCount {
                    name: name.clone(),
                    count: count.clone(),
                })?;
            if copies == 0 {
                continue;
            }
            let total = frequencies.entry(name.clone()).or_insert(0);
            *total = total
                .checked_add(copies)
                .ok_or(ExtractionError::BadCount { name, count })?;
        }
    }
    if decklists == 0 {
        return Err(ExtractionError::NoDecklists);
    }
    debug!(decklists, "counted decklists");
    Ok(frequencies)
}

fn card_names_in(html: &Html, container: &Selector) -> Vec<String> {
    let names = selector(CARD_NAME_SELECTOR);
    html.select(container)
        .flat_map(|ele| ele.select(&names).map(text_of).collect::<Vec<_>>())
        .collect()
}

fn collect_categories(html: &Html) -> CategoryMap {
    CardColor::ALL
        .iter()
        .map(|&color| {
            let cards = card_names_in(html, &selector(&color.selector()));
            debug!(color = color.name(), cards = cards.len(), "collected category");
            (color, cards)
        })
        .collect()
}

fn collect_lands(html: &Html) -> ExclusionSet {
    card_names_in(html, &selector(LAND_SELECTOR))
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(body: &str) -> Html {
        Html::parse_document(&format!("<html><body>{body}</body></html>"))
    }

    fn row(name: &str, count: &str) -> String {
        format!(
            r#"<span class="row"><span class="card-count">{count}</span> <span class="card-name">{name}</span></span>"#
        )
    }

    fn decklist(rows: &[String]) -> String {
        format!(r#"<div class="sorted-by-overview-container">{}</div>"#, rows.concat())
    }

    fn category(class: &str, names: &[&str]) -> String {
        let names = names
            .iter()
            .map(|n| format!(r#"<span class="card-name">{n}</span>"#))
            .collect::<String>();
        format!(r#"<div class="sorted-by-{class}">{names}</div>"#)
    }

    #[test]
    fn single_red_card() {
        let html = page(&[
            decklist(&[row("Lightning Bolt", "4")]),
            category("red", &["Lightning Bolt"]),
        ]
        .concat());
        let ex = extract(&html).unwrap().without_lands();
        assert_eq!(ex.frequencies.len(), 1);
        assert_eq!(ex.frequencies["Lightning Bolt"], 4);
        assert_eq!(ex.color_assignment()["Lightning Bolt"], "#f85555");
    }

    #[test]
    fn zero_copies_are_skipped() {
        let html = page(&decklist(&[row("Lightning Bolt", "0")]));
        let ex = extract(&html).unwrap();
        assert!(!ex.frequencies.contains_key("Lightning Bolt"));
    }

    #[test]
    fn counts_sum_over_decklists() {
        let html = page(
            &[
                decklist(&[row("Lightning Bolt", "4"), row("Mountain", "8")]),
                decklist(&[row("Lightning Bolt", " 3\n"), row("Counterspell", "2")]),
            ]
            .concat(),
        );
        let ex = extract(&html).unwrap();
        assert_eq!(ex.frequencies["Lightning Bolt"], 7);
        assert_eq!(ex.total_copies(), 4 + 8 + 3 + 2);
    }

    #[test]
    fn land_wins_over_color() {
        let html = page(
            &[
                decklist(&[row("Dryad Arbor", "1"), row("Tarmogoyf", "4")]),
                category("green", &["Dryad Arbor", "Tarmogoyf"]),
                category("land", &["Dryad Arbor"]),
            ]
            .concat(),
        );
        let ex = extract(&html).unwrap().without_lands();
        assert!(!ex.frequencies.contains_key("Dryad Arbor"));
        assert_eq!(ex.frequencies["Tarmogoyf"], 4);
    }

    #[test]
    fn words_are_not_counts() {
        let html = page(&decklist(&[row("Lightning Bolt", "four")]));
        assert!(matches!(
            extract(&html),
            Err(ExtractionError::BadCount { ref count, .. }) if count == "four"
        ));
    }

    #[test]
    fn missing_count_is_an_error() {
        let html = page(&decklist(&[
            r#"<span class="row"><span class="card-name">Lightning Bolt</span></span>"#.to_string(),
        ]));
        assert!(matches!(
            extract(&html),
            Err(ExtractionError::MissingField("card count"))
        ));
    }

    #[test]
    fn missing_name_is_an_error() {
        let html = page(&decklist(&[
            r#"<span class="row"><span class="card-count">4</span></span>"#.to_string(),
        ]));
        assert!(matches!(
            extract(&html),
            Err(ExtractionError::MissingField("card name"))
        ));
    }

    #[test]
    fn counts_that_do_not_fit_are_an_error() {
        let html = page(&decklist(&[
            row("Lightning Bolt", "4294967295"),
            row("Lightning Bolt", "1"),
        ]));
        assert!(matches!(
            extract(&html),
            Err(ExtractionError::BadCount { ref name, ref count })
                if name == "Lightning Bolt" && count == "1"
        ));
    }

    #[test]
    fn no_decklists_is_an_error() {
        let html = page(&category("red", &["Lightning Bolt"]));
        assert!(matches!(extract(&html), Err(ExtractionError::NoDecklists)));
    }

    #[test]
    fn categories_keep_fixed_order() {
        let html = page(
            &[
                decklist(&[]),
                category("colorless", &["Walking Ballista"]),
                category("white", &["Solitude"]),
            ]
            .concat(),
        );
        let ex = extract(&html).unwrap();
        let order = ex.categories.iter().map(|(c, _)| *c).collect::<Vec<_>>();
        assert_eq!(order, CardColor::ALL);
        assert_eq!(ex.categories[0].1, ["Solitude"]);
        assert_eq!(ex.categories[6].1, ["Walking Ballista"]);
    }

    #[test]
    fn extraction_is_repeatable() {
        let html = page(
            &[
                decklist(&[row("Lightning Bolt", "4"), row("Counterspell", "4")]),
                category("red", &["Lightning Bolt"]),
                category("blue", &["Counterspell"]),
            ]
            .concat(),
        );
        let first = extract(&html).unwrap();
        let second = extract(&html).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.color_assignment(), second.color_assignment());
    }
}
