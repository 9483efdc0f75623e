use chrono::{Datelike, Local};
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::content::{
    ABOUT_HEADLINE, ABOUT_PARAGRAPHS, CONTACT_HEADLINE, CONTACT_PITCH, HERO_HEADLINE, HERO_INTRO, HOBBIES,
    OWNER_EMAIL, OWNER_MARK, OWNER_NAME, OWNER_ROLE, PORTRAIT_URL, SKILLS, SOCIAL_LINKS, find_project, icon_glyph,
};
use crate::models::{CategoryFilter, ChatRole, FocusArea, Project};
use crate::page::{Element, ElementId, HEADER_OFFSET, PageLayout, SectionId};
use crate::state::Portfolio;
use crate::tasks::FormField;
use crate::theme::Theme;
use crate::utils::units_to_rows;

const MAX_CONTENT_WIDTH: u16 = 110;
const COLUMN_GAP: u16 = 2;
const CHAT_WIDTH: u16 = 44;

/// Rows available to the page for a terminal of `height` rows; the last row is the key bar.
pub fn page_rows(height: u16) -> u16 {
    height.saturating_sub(1).max(1)
}

/// Renders the whole screen.
pub fn render(f: &mut Frame, app: &Portfolio) {
    let theme = Theme::for_mode(app.dark_mode);
    let area = f.area();
    f.render_widget(Block::default().style(base_style(&theme)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);
    let page_area = chunks[0];

    let layout = app.layout();
    render_page(f.buffer_mut(), page_area, app, &layout, &theme);
    render_header(f, page_area, app, &theme);

    if app.chat.open {
        render_chat(f, page_area, app, &theme);
    } else if !app.view.is_case_study() {
        render_chat_launcher(f, page_area, &theme);
    }
    render_key_bar(f, chunks[1], app, &theme);

    if let Some(notice) = app.contact.notice() {
        render_notice(f, notice, &theme);
    }
    if app.show_help {
        render_help(f, &theme);
    }
}

fn base_style(theme: &Theme) -> Style {
    Style::default().bg(theme.root_bg).fg(theme.text)
}

fn secondary(theme: &Theme) -> Style {
    Style::default().fg(theme.text_secondary)
}

fn content_column(area: Rect) -> Rect {
    let width = area.width.saturating_sub(4).min(MAX_CONTENT_WIDTH);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

/// Horizontal placement of grid column `column` out of `columns`.
fn column_span(content: Rect, column: u16, columns: u16) -> (u16, u16) {
    let columns = columns.max(1);
    let width = content.width.saturating_sub(COLUMN_GAP * (columns - 1)) / columns;
    (content.x + column * (width + COLUMN_GAP), width)
}

/// Screen placement of a block; `y` may lie above the clip area.
struct Slot {
    x: u16,
    y: i32,
    width: u16,
    height: u16,
}

/// Draws into an off-screen buffer of the block's full size and copies the rows inside `clip`.
fn draw_clipped(buf: &mut Buffer, clip: Rect, slot: Slot, base: Style, draw: impl FnOnce(Rect, &mut Buffer)) {
    let clip_top = i32::from(clip.y);
    let clip_bottom = i32::from(clip.bottom());
    if slot.width == 0 || slot.height == 0 || slot.y >= clip_bottom || slot.y + i32::from(slot.height) <= clip_top {
        return;
    }

    let local = Rect::new(0, 0, slot.width, slot.height);
    let mut scratch = Buffer::empty(local);
    scratch.set_style(local, base);
    draw(local, &mut scratch);

    for row in 0..slot.height {
        let screen_y = slot.y + i32::from(row);
        if screen_y < clip_top || screen_y >= clip_bottom {
            continue;
        }
        for col in 0..slot.width {
            let screen_x = slot.x + col;
            if screen_x >= clip.right() {
                break;
            }
            if let (Some(src), Some(dst)) = (scratch.cell((col, row)), buf.cell_mut((screen_x, screen_y as u16))) {
                *dst = src.clone();
            }
        }
    }
}

fn render_page(buf: &mut Buffer, area: Rect, app: &Portfolio, layout: &PageLayout, theme: &Theme) {
    let content = content_column(area);
    let scroll_row = i32::from(units_to_rows(app.viewport.top));
    let row_on_screen = |units: u32| i32::from(area.y) + i32::from(units_to_rows(units)) - scroll_row;

    for element in layout.elements() {
        // Blocks that have not been revealed yet stay blank.
        if element.reveal && !app.scroll.is_revealed(element.id) {
            continue;
        }
        let (x, width) = column_span(content, element.column, element.columns);
        let slot = Slot {
            x,
            y: row_on_screen(element.top),
            width,
            height: units_to_rows(element.height),
        };
        draw_clipped(buf, area, slot, base_style(theme), |rect, scratch| {
            render_element(element, app, theme, rect, scratch)
        });
    }

    let heading = ElementId::Heading(SectionId::Work);
    if !app.view.is_case_study() && app.gallery.visible_projects().is_empty() && app.scroll.is_revealed(heading) {
        if let Some(el) = layout.element(heading) {
            let slot = Slot {
                x: content.x,
                y: row_on_screen(el.bottom()),
                width: content.width,
                height: 2,
            };
            draw_clipped(buf, area, slot, base_style(theme), |rect, scratch| {
                Paragraph::new(Span::styled("No projects in this category yet.", secondary(theme)))
                    .alignment(Alignment::Center)
                    .render(rect, scratch)
            });
        }
    }
}

fn render_element(element: &Element, app: &Portfolio, theme: &Theme, rect: Rect, buf: &mut Buffer) {
    match element.id {
        ElementId::Hero => render_hero(app, theme, rect, buf),
        ElementId::Inspiration => render_inspiration(app, theme, rect, buf),
        ElementId::Heading(section) => render_heading(section, app, theme, rect, buf),
        ElementId::Skill(idx) => {
            if let Some(skill) = SKILLS.get(idx) {
                let block = card(theme, false).title(Span::styled(
                    format!(" {} {} ", icon_glyph(skill.icon), skill.name),
                    theme.heading,
                ));
                Paragraph::new(Span::styled(skill.description, secondary(theme)))
                    .wrap(Wrap { trim: true })
                    .block(block)
                    .render(rect, buf);
            }
        }
        ElementId::Project(id) => {
            if let Some(project) = find_project(id) {
                let selected = app.gallery.selected().map(|p| p.id) == Some(id);
                render_project_card(project, selected, theme, rect, buf);
            }
        }
        ElementId::Portrait => {
            let lines = vec![
                Line::from(""),
                Line::from(Span::styled("◉", Style::default().fg(theme.primary))),
                Line::from(Span::styled(OWNER_NAME, theme.heading)),
                Line::from(""),
                Line::from(Span::styled(PORTRAIT_URL, secondary(theme).add_modifier(Modifier::DIM))),
            ];
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(card(theme, false))
                .render(rect, buf);
        }
        ElementId::AboutText => {
            let mut lines = vec![
                Line::from(Span::styled("About", Style::default().fg(theme.primary))),
                Line::from(Span::styled(ABOUT_HEADLINE, theme.heading)),
                Line::from(""),
            ];
            for paragraph in ABOUT_PARAGRAPHS {
                lines.push(Line::from(Span::styled(paragraph, secondary(theme))));
                lines.push(Line::from(""));
            }
            lines.push(Line::from(Span::styled("When I'm not designing", theme.heading)));
            for hobby in HOBBIES {
                lines.push(Line::from(vec![
                    Span::styled(format!("{} {}", icon_glyph(hobby.icon), hobby.name), Style::default().fg(theme.primary)),
                    Span::styled(format!(" · {}", hobby.description), secondary(theme)),
                ]));
            }
            Paragraph::new(lines).wrap(Wrap { trim: true }).render(rect, buf);
        }
        ElementId::ContactPitch => {
            let mut lines = vec![
                Line::from(Span::styled(CONTACT_HEADLINE, theme.heading)),
                Line::from(""),
                Line::from(Span::styled(CONTACT_PITCH, secondary(theme))),
                Line::from(""),
                Line::from(vec![
                    Span::styled(format!("✉ {OWNER_EMAIL}"), Style::default().fg(theme.primary)),
                    Span::styled("  [e] copy", theme.footer),
                ]),
                Line::from(""),
            ];
            for (name, url) in SOCIAL_LINKS {
                lines.push(Line::from(vec![
                    Span::styled(format!("{name:<10}"), theme.heading),
                    Span::styled(url, secondary(theme)),
                ]));
            }
            Paragraph::new(lines).wrap(Wrap { trim: true }).render(rect, buf);
        }
        ElementId::ContactForm => render_contact_form(app, theme, rect, buf),
        ElementId::Footer => {
            let year = Local::now().year();
            Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(format!("© {year} {OWNER_NAME}. Crafted with passion."), theme.footer)),
            ])
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(theme.blurred_border)),
            )
            .render(rect, buf);
        }
        ElementId::CaseHero
        | ElementId::CaseMeta
        | ElementId::CaseConcept
        | ElementId::CaseGrid
        | ElementId::CaseShot(_)
        | ElementId::CaseBack => {
            if let Some(project) = app.view.selected_project() {
                render_case_block(element.id, project, theme, rect, buf);
            }
        }
    }
}

fn card(theme: &Theme, selected: bool) -> Block<'static> {
    let border = if selected { theme.focus_border } else { theme.blurred_border };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(theme.card_bg))
}

fn render_hero(app: &Portfolio, theme: &Theme, rect: Rect, buf: &mut Buffer) {
    let spark = if app.inspiration.is_loading() {
        Span::styled("Thinking…", Style::default().fg(theme.accent).add_modifier(Modifier::ITALIC))
    } else {
        Span::styled("[i] Spark inspiration", Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
    };
    let lines = vec![
        Line::from(Span::styled(OWNER_ROLE, Style::default().fg(theme.primary).add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(Span::styled(HERO_HEADLINE, theme.heading)),
        Line::from(""),
        Line::from(Span::styled(HERO_INTRO, secondary(theme))),
        Line::from(""),
        Line::from(vec![
            Span::styled("[1] View work", theme.chip_active),
            Span::raw("   "),
            Span::styled("[f] Get in touch", theme.heading),
            Span::raw("   "),
            spark,
        ]),
    ];
    Paragraph::new(lines).wrap(Wrap { trim: true }).render(rect, buf);
}

fn render_inspiration(app: &Portfolio, theme: &Theme, rect: Rect, buf: &mut Buffer) {
    let Some(inspiration) = app.inspiration.current() else {
        return;
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent))
        .title(Span::styled(" ✦ Design challenge ", theme.popup_title));
    let lines = vec![
        Line::from(Span::styled(inspiration.topic.clone(), Style::default().fg(theme.primary).add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(inspiration.challenge.clone(), Style::default().fg(theme.text))),
        Line::from(""),
        Line::from(Span::styled("[y] copy   [x] dismiss   [i] another one", theme.footer)),
    ];
    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(block)
        .render(rect, buf);
}

fn render_heading(section: SectionId, app: &Portfolio, theme: &Theme, rect: Rect, buf: &mut Buffer) {
    let mut lines = Vec::new();
    match section {
        SectionId::Skills => {
            lines.push(Line::from(Span::styled("Expertise", theme.heading)));
            lines.push(Line::from(Span::styled(
                "Disciplines I bring to every project.",
                secondary(theme),
            )));
        }
        SectionId::Work => {
            lines.push(Line::from(Span::styled("Selected Work", theme.heading)));
            let mut chips = vec![Span::styled("[Tab] ", theme.footer)];
            for choice in CategoryFilter::CHOICES {
                let style = if choice == app.gallery.active() { theme.chip_active } else { theme.chip };
                chips.push(Span::styled(format!(" {} ", choice.label()), style));
                chips.push(Span::raw(" "));
            }
            lines.push(Line::from(chips));
        }
        other => lines.push(Line::from(Span::styled(other.nav_label(), theme.heading))),
    }
    Paragraph::new(lines).render(rect, buf);
}

fn render_project_card(project: &Project, selected: bool, theme: &Theme, rect: Rect, buf: &mut Buffer) {
    let title_style = if selected { theme.card_selected } else { theme.heading };
    let mut block = card(theme, selected).title(Span::styled(format!(" {} ", project.title), title_style));
    if selected {
        block = block.title_bottom(Line::from(Span::styled(" ⏎ case study ", theme.card_selected)).right_aligned());
    }
    let lines = vec![
        Line::from(Span::styled(
            project.category.label().to_uppercase(),
            Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(project.description, secondary(theme))),
    ];
    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(block)
        .render(rect, buf);
}

fn render_case_block(id: ElementId, project: &Project, theme: &Theme, rect: Rect, buf: &mut Buffer) {
    let study = project.case_study.as_ref();
    let label = |text: &'static str| Span::styled(text, Style::default().fg(theme.primary).add_modifier(Modifier::BOLD));

    let paragraph = match id {
        ElementId::CaseHero => Paragraph::new(vec![
            Line::from(label("CASE STUDY")),
            Line::from(Span::styled(project.category.label(), secondary(theme))),
            Line::from(""),
            Line::from(Span::styled(project.title, theme.heading)),
            Line::from(""),
            Line::from(Span::styled(project.description, secondary(theme))),
            Line::from(Span::styled(project.image_url, secondary(theme).add_modifier(Modifier::DIM))),
        ]),
        ElementId::CaseMeta => match study {
            Some(study) => Paragraph::new(vec![
                Line::from(vec![label("Role      "), Span::raw(study.role)]),
                Line::from(vec![label("Timeline  "), Span::raw(study.timeline)]),
                Line::from(vec![label("Tools     "), Span::raw(study.tools.join(", "))]),
            ])
            .block(card(theme, false)),
            None => Paragraph::new(Span::styled("The full case study is on its way.", secondary(theme)))
                .block(card(theme, false)),
        },
        ElementId::CaseConcept => match study {
            Some(study) => text_card(study.concept_title, study.concept_description, theme),
            None => return,
        },
        ElementId::CaseGrid => match study {
            Some(study) => text_card(study.grid_title, study.grid_description, theme),
            None => return,
        },
        ElementId::CaseShot(idx) => match study.and_then(|s| s.process_gallery.get(idx)) {
            Some(shot) => Paragraph::new(vec![
                Line::from(vec![
                    Span::styled(format!("▣ {:02} ", idx + 1), Style::default().fg(theme.primary)),
                    Span::styled(shot.caption, theme.heading),
                ]),
                Line::from(Span::styled(shot.url, secondary(theme).add_modifier(Modifier::DIM))),
            ])
            .block(card(theme, false)),
            None => return,
        },
        ElementId::CaseBack => Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("[Esc] ← Back to all projects", theme.card_selected)),
        ])
        .alignment(Alignment::Center),
        _ => return,
    };
    paragraph.wrap(Wrap { trim: true }).render(rect, buf);
}

fn text_card(title: &'static str, body: &'static str, theme: &Theme) -> Paragraph<'static> {
    let block = card(theme, false).title(Span::styled(format!(" {title} "), theme.heading));
    Paragraph::new(Span::styled(body, secondary(theme))).block(block)
}

fn render_contact_form(app: &Portfolio, theme: &Theme, rect: Rect, buf: &mut Buffer) {
    let focused = app.focus == FocusArea::Form;
    let block = card(theme, focused).title(Span::styled(" Send a message ", theme.heading));
    let inner = block.inner(rect);
    block.render(rect, buf);

    if app.contact.is_submitted() {
        Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("✓ Message sent!", theme.success)),
            Line::from(""),
            Line::from(Span::styled(
                "Thanks for reaching out. I'll get back to you soon.",
                secondary(theme),
            )),
            Line::from(""),
            Line::from(Span::styled("[n] Send another message", theme.footer)),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(inner, buf);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    for (field, area) in FormField::ALL.into_iter().zip(rows.iter()) {
        let active = focused && app.contact.active_field() == field;
        let mut value = app.contact.field(field).to_string();
        if active {
            value.push('▏');
        }
        let border = if active { theme.focus_border } else { theme.blurred_border };
        Paragraph::new(value)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border))
                    .title(Span::styled(field.label(), secondary(theme))),
            )
            .render(*area, buf);
    }

    if let Some(err) = app.contact.validation() {
        Paragraph::new(Span::styled(err.to_string(), theme.error)).render(rows[3], buf);
    }

    let button = if app.contact.is_submitting() {
        Span::styled("Sending…", Style::default().fg(theme.accent).add_modifier(Modifier::ITALIC))
    } else if focused {
        Span::styled("[Enter] Send message", theme.chip_active)
    } else {
        Span::styled("[f] Write me a message", theme.card_selected)
    };
    Paragraph::new(button).alignment(Alignment::Right).render(rows[4], buf);
}

fn render_header(f: &mut Frame, area: Rect, app: &Portfolio, theme: &Theme) {
    let header = Rect::new(area.x, area.y, area.width, units_to_rows(HEADER_OFFSET).min(area.height));
    f.render_widget(Clear, header);
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(theme.blurred_border))
        .style(base_style(theme));
    let inner = block.inner(header);
    f.render_widget(block, header);
    if inner.height == 0 {
        return;
    }

    let content = content_column(inner);
    let line = Rect::new(content.x, inner.y + inner.height / 2, content.width, 1);

    let brand = Line::from(vec![
        Span::styled(OWNER_MARK, theme.brand),
        Span::styled(".", Style::default().fg(theme.primary).add_modifier(Modifier::BOLD)),
    ]);
    f.render_widget(Paragraph::new(brand), line);

    let mut nav = Vec::new();
    if app.view.is_case_study() {
        nav.push(Span::styled("[Esc] ← Back to Projects", theme.card_selected));
    } else {
        let active = app.scroll.active_section();
        for (idx, section) in SectionId::NAV.into_iter().enumerate() {
            let style = if active == Some(section) { theme.nav_active } else { theme.nav_link };
            nav.push(Span::styled(format!("{} ", idx + 1), theme.footer));
            nav.push(Span::styled(section.nav_label(), style));
            nav.push(Span::raw("   "));
        }
    }
    let mode = if app.dark_mode { "☾" } else { "☀" };
    nav.push(Span::styled(format!("  [t] {mode}"), theme.footer));
    f.render_widget(Paragraph::new(Line::from(nav)).alignment(Alignment::Right), line);
}

fn wrapped_rows(width: usize, columns: u16) -> u16 {
    let columns = usize::from(columns.max(1));
    width.max(1).div_ceil(columns).min(usize::from(u16::MAX)) as u16
}

fn render_chat(f: &mut Frame, area: Rect, app: &Portfolio, theme: &Theme) {
    let width = CHAT_WIDTH.min(area.width);
    let height = (area.height * 3 / 4)
        .max(8)
        .min(area.height.saturating_sub(units_to_rows(HEADER_OFFSET)));
    if height < 5 {
        return;
    }
    let panel = Rect::new(area.right() - width, area.bottom() - height, width, height);
    f.render_widget(Clear, panel);

    let focused = app.focus == FocusArea::Chat;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused { theme.focus_border } else { theme.blurred_border }))
        .title(Span::styled(" Design Assistant ", theme.popup_title))
        .title_bottom(Line::from(Span::styled(" [m] type  [c] close ", theme.footer)).right_aligned())
        .style(base_style(theme));
    let inner = block.inner(panel);
    f.render_widget(block, panel);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)])
        .split(inner);

    let mut lines = Vec::new();
    for message in app.chat.transcript() {
        let author = match message.role {
            ChatRole::User => theme.chat_user,
            ChatRole::Assistant => theme.chat_assistant,
        };
        lines.push(Line::from(vec![
            Span::styled(message.author_label(), author),
            Span::styled(format!("  {}", message.sent_at.format("%H:%M")), theme.footer),
        ]));
        lines.push(Line::from(Span::styled(message.text.clone(), Style::default().fg(theme.text))));
        lines.push(Line::from(""));
    }
    if app.chat.is_typing() {
        lines.push(Line::from(Span::styled(
            "Assistant is typing…",
            secondary(theme).add_modifier(Modifier::ITALIC),
        )));
    }

    // Keep the newest message in view.
    let total: u16 = lines.iter().map(|line| wrapped_rows(line.width(), chunks[0].width)).sum();
    let scroll = total.saturating_sub(chunks[0].height);
    f.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).scroll((scroll, 0)),
        chunks[0],
    );

    let input = if app.chat.draft.is_empty() && !focused {
        Span::styled("Ask about my work…", secondary(theme))
    } else if focused {
        Span::styled(format!("{}▏", app.chat.draft), Style::default().fg(theme.text))
    } else {
        Span::styled(app.chat.draft.clone(), Style::default().fg(theme.text))
    };
    f.render_widget(
        Paragraph::new(input).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(if focused { theme.focus_border } else { theme.blurred_border })),
        ),
        chunks[1],
    );
}

fn render_chat_launcher(f: &mut Frame, area: Rect, theme: &Theme) {
    let width = 12.min(area.width);
    let height = 3.min(area.height);
    let launcher = Rect::new(area.right() - width, area.bottom() - height, width, height);
    f.render_widget(Clear, launcher);
    f.render_widget(
        Paragraph::new(Span::styled("[c] Chat", theme.card_selected))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary))
                    .style(base_style(theme)),
            ),
        launcher,
    );
}

fn render_key_bar(f: &mut Frame, area: Rect, app: &Portfolio, theme: &Theme) {
    let keys = match app.focus {
        FocusArea::Form => "Tab next field • Shift-Tab previous • Enter send • Esc done",
        FocusArea::Chat => "Enter send • Esc leave chat",
        FocusArea::Page if app.view.is_case_study() => {
            "Esc back • 0-4 sections • j/k scroll • t theme • ? help • q quit"
        }
        FocusArea::Page => {
            "0-4 sections • j/k scroll • Tab filter • ←/→ card • Enter open • i inspire • c chat • f contact • ? help • q quit"
        }
    };
    f.render_widget(Paragraph::new(keys).style(theme.footer), area);
}

fn render_notice(f: &mut Frame, notice: &str, theme: &Theme) {
    let area = centered_rect(50, 25, f.area());
    f.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.error)
        .title(Span::styled(" Submission failed ", theme.error.add_modifier(Modifier::BOLD)))
        .style(theme.popup_border);
    let para = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(notice.to_string(), theme.popup_text)),
        Line::from(""),
        Line::from(Span::styled("[Enter] OK", theme.footer)),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(block);
    f.render_widget(para, area);
}

fn render_help(f: &mut Frame, theme: &Theme) {
    let area = centered_rect(60, 70, f.area());
    f.render_widget(Clear, area);
    let rows = [
        ("0", "Home"),
        ("1 2 3 4", "Work, Expertise, About, Contact"),
        ("j k ↑ ↓", "Scroll"),
        ("PgUp PgDn", "Scroll a page"),
        ("Tab Shift-Tab", "Change project category"),
        ("← → h l", "Move between project cards"),
        ("Enter", "Open the selected case study"),
        ("Esc b", "Back from a case study"),
        ("i", "Get a design challenge"),
        ("y x", "Copy or dismiss the challenge"),
        ("c", "Open or close the chat"),
        ("m", "Type in the open chat"),
        ("f", "Write a message"),
        ("n", "Dismiss the sent confirmation"),
        ("e", "Copy my email address"),
        ("t", "Switch light and dark"),
        ("q", "Quit"),
    ];
    let lines: Vec<Line> = rows
        .iter()
        .map(|(keys, action)| {
            Line::from(vec![
                Span::styled(format!("{keys:<15}"), theme.popup_title),
                Span::styled(*action, theme.popup_text),
            ])
        })
        .collect();
    let para = Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled(" Keys ", theme.popup_title))
            .borders(Borders::ALL)
            .style(theme.popup_border),
    );
    f.render_widget(para, area);
}

/// Centers a rectangle within another rectangle.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r)[1];
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical)[1]
}
