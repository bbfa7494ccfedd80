//! # Rendering Module
//!
//! Turns command results into terminal text through the templates in `templates/` and the
//! theme in `styles`.
//!
//! Layout calculations (column widths, padding, wrapping, right alignment) stay in Rust
//! because they need Unicode-aware widths. Templates receive ready-made strings plus the
//! semantic style name for each of them.
//!
//! Every `render_*` function takes `use_color`; the CLI decides it once from the terminal
//! and the `--no-color` flag. Tests render with `false` and compare plain text.

use super::styles::{names, ENERGIA_THEME};
use super::templates;
use chrono::NaiveDate;
use energia::api::{CmdMessage, MessageLevel, TableView};
use energia::config::EnergiaConfig;
use energia::error::{EnergiaError, Result};
use energia::landing::{Feature, LandingView, Section, SectionSpan, Visibility};
use energia::model::{FactorTier, Record};
use energia::view_state::{FilterPanel, SortDirection, SortKey, ViewState};
use minijinja::{context, Environment, Value};
use serde::Serialize;
use std::fmt::Write;
use std::path::Path;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
const MARGIN: &str = "  ";
const COLUMN_GAP: &str = "  ";
const MIN_GAP: usize = 3;

pub const SORT_ASC: &str = "▲";
pub const SORT_DESC: &str = "▼";
const ACTIONS: &str = "✎ ✕ ⋮";

const TABLE_TITLE: &str = "Dados de";
const TABLE_TITLE_HIGHLIGHT: &str = "Energia";
const TABLE_SUBTITLE: &str = "Acompanhe os fatores de eficiência energética por período e região";
const SEARCH_PLACEHOLDER: &str = "Buscar por sigla, data ou fator...";
const EMPTY_TITLE: &str = "Nenhum resultado encontrado";
const EMPTY_HINT: &str = "Tente ajustar os filtros ou termos de busca";
const PANEL_NOTE: &str = "Filtros de período e fator mínimo ainda não são aplicados aos resultados.";
const PAGER: &str = "‹ Anterior  [1]  2  Próximo ›";

const COLUMNS: [(Option<SortKey>, &str); 5] = [
    (Some(SortKey::PeriodStart), "Data Início"),
    (Some(SortKey::PeriodEnd), "Data Fim"),
    (Some(SortKey::Tag), "Sigla"),
    (Some(SortKey::Factor), "Fator"),
    (None, "Ações"),
];

fn render_error(e: minijinja::Error) -> EnergiaError {
    EnergiaError::Render(e.to_string())
}

/// Template environment with every template and the `style` filter registered.
fn environment(use_color: bool) -> Result<Environment<'static>> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);

    env.add_filter("style", move |value: Value, name: String| -> String {
        let text = value.to_string();
        if use_color {
            ENERGIA_THEME.apply(&name, &text)
        } else {
            ENERGIA_THEME.apply_plain(&name, &text)
        }
    });

    for &(name, source) in templates::ALL {
        env.add_template(name, source).map_err(render_error)?;
    }
    Ok(env)
}

fn render_named<S: Serialize>(name: &str, data: S, use_color: bool) -> Result<String> {
    let env = environment(use_color)?;
    let template = env.get_template(name).map_err(render_error)?;
    template.render(data).map_err(render_error)
}

#[derive(Serialize)]
struct Styled {
    text: String,
    style: &'static str,
}

#[derive(Serialize)]
struct Cell {
    text: String,
    style: &'static str,
    sep: &'static str,
}

#[derive(Serialize)]
struct HeadingData {
    lead: &'static str,
    highlight: &'static str,
    intro: &'static str,
}

#[derive(Serialize)]
struct PanelField {
    label: &'static str,
    text: String,
    style: &'static str,
}

#[derive(Serialize)]
struct PanelData {
    fields: Vec<PanelField>,
    note: &'static str,
}

#[derive(Serialize)]
struct TableData {
    margin: &'static str,
    heading: HeadingData,
    search: Styled,
    controls: String,
    gap: String,
    panel: Option<PanelData>,
    rule: String,
    header: Vec<Cell>,
    rows: Vec<Vec<Cell>>,
    empty: bool,
    empty_title: &'static str,
    empty_hint: &'static str,
    summary: String,
    pager: &'static str,
    pager_gap: String,
}

/// Renders the records table with its controls, optional filter panel and footer.
pub fn render_table(
    table: &TableView,
    state: &ViewState,
    config: &EnergiaConfig,
    use_color: bool,
) -> Result<String> {
    let header_texts: Vec<String> = COLUMNS
        .iter()
        .map(|(key, label)| header_text(*key, label, state))
        .collect();

    let row_texts: Vec<[String; 5]> = table
        .rows
        .iter()
        .map(|record| row_text(record, config))
        .collect::<Result<_>>()?;

    let widths: Vec<usize> = (0..COLUMNS.len())
        .map(|col| {
            row_texts
                .iter()
                .map(|row| row[col].width())
                .chain(std::iter::once(header_texts[col].width()))
                .max()
                .unwrap_or(0)
        })
        .collect();
    let rule_width = widths.iter().sum::<usize>() + COLUMN_GAP.width() * (COLUMNS.len() - 1);

    let header = header_texts
        .iter()
        .enumerate()
        .map(|(col, text)| {
            let active = COLUMNS[col].0.is_some() && COLUMNS[col].0 == state.sort.key;
            Cell {
                text: pad_to_width(text, widths[col]),
                style: if active {
                    names::HEADER_ACTIVE
                } else {
                    names::HEADER
                },
                sep: separator(col),
            }
        })
        .collect();

    let rows = table
        .rows
        .iter()
        .zip(row_texts)
        .enumerate()
        .map(|(index, (record, texts))| {
            let date_style = if config.zebra && index % 2 == 0 {
                names::DATE_STRIPED
            } else {
                names::DATE
            };
            let styles = [
                date_style,
                date_style,
                names::TAG,
                factor_style(record.tier()),
                names::FAINT,
            ];
            texts
                .into_iter()
                .enumerate()
                .map(|(col, text)| Cell {
                    text: if col + 1 == COLUMNS.len() {
                        text
                    } else {
                        pad_to_width(&text, widths[col])
                    },
                    style: styles[col],
                    sep: separator(col),
                })
                .collect()
        })
        .collect();

    let search = if state.search_term.is_empty() {
        Styled {
            text: SEARCH_PLACEHOLDER.to_string(),
            style: names::FAINT,
        }
    } else {
        Styled {
            text: state.search_term.clone(),
            style: names::LABEL,
        }
    };
    let controls = format!(
        "[Filtros {}]  [+ Adicionar]  [Exportar]",
        if state.filter_panel.open { "▴" } else { "▾" }
    );
    let gap = right_align_gap(
        "Buscar: ".width() + search.text.width(),
        controls.width(),
        rule_width,
    );

    let summary = format!(
        "Mostrando {} de {} registros",
        table.shown(),
        table.total
    );
    let pager_gap = right_align_gap(summary.width(), PAGER.width(), rule_width);

    let data = TableData {
        margin: MARGIN,
        heading: HeadingData {
            lead: TABLE_TITLE,
            highlight: TABLE_TITLE_HIGHLIGHT,
            intro: TABLE_SUBTITLE,
        },
        search,
        controls,
        gap,
        panel: state
            .filter_panel
            .open
            .then(|| panel_data(&state.filter_panel, config))
            .transpose()?,
        rule: "─".repeat(rule_width),
        header,
        rows,
        empty: table.is_empty(),
        empty_title: EMPTY_TITLE,
        empty_hint: EMPTY_HINT,
        summary,
        pager: PAGER,
        pager_gap,
    };

    render_named("table", &data, use_color)
}

fn header_text(key: Option<SortKey>, label: &str, state: &ViewState) -> String {
    let Some(key) = key else {
        return label.to_string();
    };
    let indicator = match (state.sort.key == Some(key), state.sort.direction) {
        (true, SortDirection::Ascending) => SORT_ASC,
        (true, SortDirection::Descending) => SORT_DESC,
        (false, _) => " ",
    };
    format!("{} {}", label, indicator)
}

fn row_text(record: &Record, config: &EnergiaConfig) -> Result<[String; 5]> {
    Ok([
        format_date(record.period_start, &config.date_format)?,
        format_date(record.period_end, &config.date_format)?,
        record.tag.clone(),
        format!("{:.2}", record.factor),
        ACTIONS.to_string(),
    ])
}

/// `layout` applied to `date`; layouts needing a time or zone are an error, not a panic.
fn format_date(date: NaiveDate, layout: &str) -> Result<String> {
    let mut text = String::new();
    write!(text, "{}", date.format(layout))
        .map_err(|_| EnergiaError::Render(format!("Cannot format a date with '{}'", layout)))?;
    Ok(text)
}

fn factor_style(tier: FactorTier) -> &'static str {
    match tier {
        FactorTier::High => names::FACTOR_HIGH,
        FactorTier::Medium => names::FACTOR_MEDIUM,
        FactorTier::Low => names::FACTOR_LOW,
    }
}

fn separator(col: usize) -> &'static str {
    if col + 1 == COLUMNS.len() {
        ""
    } else {
        COLUMN_GAP
    }
}

fn panel_data(panel: &FilterPanel, config: &EnergiaConfig) -> Result<PanelData> {
    let date_field = |label, date: Option<NaiveDate>| -> Result<PanelField> {
        Ok(match date {
            Some(date) => PanelField {
                label,
                text: format_date(date, &config.date_format)?,
                style: names::LABEL,
            },
            None => PanelField {
                label,
                text: "dd/mm/aaaa".to_string(),
                style: names::FAINT,
            },
        })
    };

    let min_factor = match panel.min_factor {
        Some(factor) => PanelField {
            label: "Fator Mínimo:",
            text: format!("{:.2}", factor),
            style: names::LABEL,
        },
        None => PanelField {
            label: "Fator Mínimo:",
            text: "0.80".to_string(),
            style: names::FAINT,
        },
    };

    Ok(PanelData {
        fields: vec![
            date_field("Data Início:", panel.start)?,
            date_field("Data Fim:", panel.end)?,
            min_factor,
        ],
        note: PANEL_NOTE,
    })
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

/// Renders command messages with their level styles.
pub fn render_messages(messages: &[CmdMessage], use_color: bool) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let data: Vec<MessageData> = messages
        .iter()
        .map(|msg| MessageData {
            content: msg.content.clone(),
            style: match msg.level {
                MessageLevel::Info => names::INFO,
                MessageLevel::Success => names::SUCCESS,
                MessageLevel::Warning => names::WARNING,
            },
        })
        .collect();

    render_named("messages", context! { messages => data }, use_color).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

pub fn render_config(config: &EnergiaConfig, location: &Path, use_color: bool) -> Result<String> {
    let entries: Vec<_> = config
        .entries()
        .into_iter()
        .map(|(key, value)| context! { key => key, value => value })
        .collect();

    render_named(
        "config",
        context! {
            location => format!("# {}", location.display()),
            entries => entries,
        },
        use_color,
    )
}

/// A rendered landing page: fixed navigation lines plus the scrollable body.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub chrome: Vec<String>,
    pub body: Vec<String>,
    pub spans: Vec<SectionSpan>,
}

#[derive(Serialize)]
struct FeatureData {
    icon: &'static str,
    title: &'static str,
    lines: Vec<String>,
}

fn feature_data(features: &[Feature], width: usize) -> Vec<FeatureData> {
    features
        .iter()
        .map(|f| FeatureData {
            icon: f.icon,
            title: f.title,
            lines: wrap(f.description, width),
        })
        .collect()
}

pub fn render_landing(view: &LandingView, use_color: bool) -> Result<RenderedPage> {
    let page = &view.page;
    let text_width = LINE_WIDTH - MARGIN.width() - 3;
    let rule = "─".repeat(LINE_WIDTH - MARGIN.width());

    let brand_width = "⚡ ".width() + page.brand.width();
    let links = if view.menu_open {
        "✕".to_string()
    } else {
        let labels: Vec<&str> = page.nav.iter().map(|link| link.label).collect();
        format!("{}   ☰", labels.join("  "))
    };
    let gap = right_align_gap(brand_width, links.width(), rule.width());
    let nav = render_named(
        "nav",
        context! {
            margin => MARGIN,
            brand => page.brand,
            gap => gap,
            links => links,
            menu_open => view.menu_open,
            nav => &page.nav,
            rule => &rule,
        },
        use_color,
    )?;

    let mut body = Vec::new();
    let mut spans = Vec::new();
    for section in &view.sections {
        let text = match section {
            Section::Home => render_named(
                "home",
                context! {
                    margin => MARGIN,
                    hero => &page.hero,
                    pitch => wrap(page.hero.pitch, text_width),
                },
                use_color,
            )?,
            Section::Stats => render_named(
                "stats",
                context! { margin => MARGIN, stats => &page.stats },
                use_color,
            )?,
            Section::Services => render_named(
                "features",
                context! {
                    margin => MARGIN,
                    heading => &page.services_heading,
                    intro => wrap(page.services_heading.intro, text_width),
                    features => feature_data(&page.services, text_width),
                },
                use_color,
            )?,
            Section::Benefits => render_named(
                "benefits",
                context! {
                    margin => MARGIN,
                    heading => &page.benefits_heading,
                    intro => wrap(page.benefits_heading.intro, text_width),
                    benefits => &page.benefits,
                    highlights => &page.highlights,
                },
                use_color,
            )?,
            Section::About => render_named(
                "features",
                context! {
                    margin => MARGIN,
                    heading => &page.about_heading,
                    intro => wrap(page.about_heading.intro, text_width),
                    features => feature_data(&page.pillars, text_width),
                },
                use_color,
            )?,
            Section::Contact => render_named(
                "contact",
                context! {
                    margin => MARGIN,
                    heading => &page.contact.heading,
                    intro => wrap(page.contact.heading.intro, text_width),
                    channels => &page.contact.channels,
                    form_fields => &page.contact.form_fields,
                    submit => page.contact.submit,
                },
                use_color,
            )?,
            Section::Footer => render_named(
                "footer",
                context! {
                    margin => MARGIN,
                    rule => &rule,
                    brand => page.brand,
                    copyright => page.footer.copyright,
                    links => &page.footer.links,
                },
                use_color,
            )?,
        };

        let lines: Vec<String> = text.lines().map(str::to_string).collect();
        spans.push(SectionSpan {
            section: *section,
            start: body.len(),
            len: lines.len(),
        });
        body.extend(lines);
    }

    Ok(RenderedPage {
        chrome: nav.lines().map(str::to_string).collect(),
        body,
        spans,
    })
}

/// Status line listing the anchored sections seen so far, in page order, e.g.
/// `▸ #home #services`.
pub fn render_visible_anchors(visibility: &Visibility, use_color: bool) -> String {
    let anchors: Vec<String> = Section::all()
        .iter()
        .filter(|s| visibility.is_visible(**s))
        .filter_map(|s| s.anchor())
        .map(|a| format!("#{}", a))
        .collect();
    let text = if anchors.is_empty() {
        "▸ (nenhuma seção visível)".to_string()
    } else {
        format!("▸ {}", anchors.join(" "))
    };

    let styled = if use_color {
        ENERGIA_THEME.apply(names::FAINT, &text)
    } else {
        ENERGIA_THEME.apply_plain(names::FAINT, &text)
    };
    format!("{}{}", MARGIN, styled)
}

/// Spaces that push `right` to end at `total`, never fewer than `MIN_GAP`.
fn right_align_gap(left: usize, right: usize, total: usize) -> String {
    " ".repeat(total.saturating_sub(left + right).max(MIN_GAP))
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

/// Greedy word wrap by display width. Words wider than `width` get a line of their own.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let word_width: usize = word.chars().map(|c| c.width().unwrap_or(0)).sum();
        if !current.is_empty() && current.width() + 1 + word_width > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use energia::commands::landing::{run as landing, LandingOptions};
    use energia::commands::view;
    use energia::store::memory::sample_records;
    use energia::view_state::SortConfig;

    fn table_output(state: &ViewState) -> String {
        let records = sample_records();
        let table = view::run(&records, state);
        render_table(&table, state, &EnergiaConfig::default(), false).unwrap()
    }

    fn landing_page(options: LandingOptions) -> RenderedPage {
        let view = landing(&options).unwrap().landing.unwrap();
        render_landing(&view, false).unwrap()
    }

    #[test]
    fn test_table_shows_all_records_and_summary() {
        let output = table_output(&ViewState::new());
        assert!(output.contains("Dados de Energia"));
        assert!(output.contains("SP-01"));
        assert!(output.contains("PE-10"));
        assert!(output.contains("15/01/2024"));
        assert!(output.contains("0.85"));
        assert!(output.contains("Mostrando 10 de 10 registros"));
        assert!(output.contains(SEARCH_PLACEHOLDER));
        assert!(!output.contains("(!?)"));
    }

    #[test]
    fn test_table_factor_has_two_decimals() {
        let records = vec![Record::new(
            1,
            chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            chrono::NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            "X-01",
            0.9,
        )];
        let state = ViewState::new();
        let table = view::run(&records, &state);
        let output = render_table(&table, &state, &EnergiaConfig::default(), false).unwrap();
        assert!(output.contains("0.90"));
    }

    #[test]
    fn test_table_rows_follow_view_order() {
        let state = ViewState::new().with_sort(SortConfig::by(
            SortKey::Factor,
            SortDirection::Descending,
        ));
        let output = table_output(&state);
        let ba = output.find("BA-07").unwrap();
        let pe = output.find("PE-10").unwrap();
        let go = output.find("GO-09").unwrap();
        assert!(ba < pe && pe < go);
        assert!(output.contains(&format!("Fator {}", SORT_DESC)));
    }

    #[test]
    fn test_table_sort_indicator_ascending() {
        let output = table_output(&ViewState::new().toggle_sort(SortKey::Tag));
        assert!(output.contains(&format!("Sigla {}", SORT_ASC)));
        assert!(!output.contains(SORT_DESC));
    }

    #[test]
    fn test_table_empty_state() {
        let output = table_output(&ViewState::new().with_search("zzz"));
        assert!(output.contains(EMPTY_TITLE));
        assert!(output.contains(EMPTY_HINT));
        assert!(output.contains("Mostrando 0 de 10 registros"));
        assert!(output.contains("Buscar: zzz"));
    }

    #[test]
    fn test_table_filter_panel() {
        let closed = table_output(&ViewState::new());
        assert!(!closed.contains("Fator Mínimo:"));

        let state = ViewState::new().with_filter_panel(FilterPanel {
            open: true,
            start: chrono::NaiveDate::from_ymd_opt(2024, 2, 1),
            end: None,
            min_factor: Some(0.8),
        });
        let open = table_output(&state);
        assert!(open.contains("Data Início: 01/02/2024"));
        assert!(open.contains("Data Fim: dd/mm/aaaa"));
        assert!(open.contains("Fator Mínimo: 0.80"));
        assert!(open.contains(PANEL_NOTE));
        assert!(open.contains("Mostrando 10 de 10 registros"));
    }

    #[test]
    fn test_table_uses_configured_date_format() {
        let records = sample_records();
        let state = ViewState::new().with_search("SP");
        let table = view::run(&records, &state);
        let mut config = EnergiaConfig::default();
        config.set_date_format("%Y-%m-%d").unwrap();
        let output = render_table(&table, &state, &config, false).unwrap();
        assert!(output.contains("2024-01-15"));
        assert!(!output.contains("15/01/2024"));
    }

    #[test]
    fn test_table_time_layout_is_an_error_not_a_panic() {
        let records = sample_records();
        let state = ViewState::new();
        let table = view::run(&records, &state);
        let config = EnergiaConfig {
            date_format: "%H:%M".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            render_table(&table, &state, &config, false),
            Err(EnergiaError::Render(_))
        ));

        let empty = view::run(&records, &state.with_search("zzz"));
        let panel_state = ViewState::new().with_filter_panel(FilterPanel {
            open: true,
            start: NaiveDate::from_ymd_opt(2024, 2, 1),
            ..Default::default()
        });
        assert!(render_table(&empty, &panel_state, &config, false).is_err());
    }

    #[test]
    fn test_table_columns_align() {
        let output = table_output(&ViewState::new());
        let positions: Vec<usize> = output
            .lines()
            .filter(|line| line.contains("-0") || line.contains("-10"))
            .filter_map(|line| {
                let tag_at = line.find(|c: char| c.is_ascii_uppercase())?;
                Some(line[..tag_at].width())
            })
            .collect();
        assert_eq!(positions.len(), 10);
        assert!(positions.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_render_messages() {
        assert!(render_messages(&[], false).is_empty());
        let output = render_messages(
            &[
                CmdMessage::info("first"),
                CmdMessage::warning("second"),
            ],
            false,
        );
        assert_eq!(output, "first\nsecond\n");
    }

    #[test]
    fn test_render_config() {
        let output = render_config(
            &EnergiaConfig::default(),
            Path::new("/tmp/energia"),
            false,
        )
        .unwrap();
        assert!(output.contains("# /tmp/energia"));
        assert!(output.contains("date-format = %d/%m/%Y"));
        assert!(output.contains("zebra = true"));
    }

    #[test]
    fn test_landing_renders_every_section() {
        let page = landing_page(LandingOptions::default());
        let text = page.body.join("\n");
        assert!(page.chrome[0].contains("EnergiaTech"));
        assert!(page.chrome[0].contains("Serviços"));
        assert!(text.contains("O Futuro da Energia"));
        assert!(text.contains("50MW Capacidade Instalada"));
        assert!(text.contains("Energia Eólica"));
        assert!(text.contains("✔ Financiamento facilitado"));
        assert!(text.contains("Confiabilidade"));
        assert!(text.contains("contato@energiatech.com.br"));
        assert!(text.contains("Todos os direitos reservados"));
        assert!(!text.contains("(!?)"));
    }

    #[test]
    fn test_landing_spans_cover_body() {
        let page = landing_page(LandingOptions::default());
        assert_eq!(page.spans.len(), Section::all().len());
        let mut next = 0;
        for span in &page.spans {
            assert_eq!(span.start, next);
            assert!(span.len > 0);
            next += span.len;
        }
        assert_eq!(next, page.body.len());
    }

    #[test]
    fn test_landing_single_section_and_menu() {
        let page = landing_page(LandingOptions {
            section: Some("contact".into()),
            menu_open: true,
        });
        let text = page.body.join("\n");
        assert!(text.contains("Entre em Contato"));
        assert!(!text.contains("Nossos Serviços"));
        assert!(page.chrome.iter().any(|l| l.contains("Sobre #about")));
    }

    #[test]
    fn test_landing_lines_fit_width() {
        let page = landing_page(LandingOptions::default());
        for line in page.chrome.iter().chain(&page.body) {
            assert!(line.width() <= LINE_WIDTH, "too wide: {:?}", line);
        }
    }

    #[test]
    fn test_visible_anchors_line() {
        let mut visibility = Visibility::new();
        assert!(render_visible_anchors(&visibility, false).contains("nenhuma"));

        visibility.observe(Section::Services, 0.5);
        visibility.observe(Section::Home, 1.0);
        visibility.observe(Section::Stats, 1.0);
        visibility.observe(Section::Contact, 0.05);
        assert_eq!(
            render_visible_anchors(&visibility, false),
            "  ▸ #home #services"
        );
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap("a bb ccc", 4), vec!["a bb", "ccc"]);
        assert_eq!(wrap("  spaced   words ", 80), vec!["spaced words"]);
        assert_eq!(wrap("longword x", 3), vec!["longword", "x"]);
        assert!(wrap("", 10).is_empty());
    }
}
