use ratatui::style::{Color, Modifier, Style};

pub struct Theme {
    pub root_bg: Color,
    pub card_bg: Color,
    pub focus_border: Color,
    pub blurred_border: Color,
    pub text: Color,
    pub text_secondary: Color,
    pub primary: Color,
    pub accent: Color,

    // Specific components
    pub nav_link: Style,
    pub nav_active: Style,
    pub brand: Style,
    pub heading: Style,
    pub chip: Style,
    pub chip_active: Style,
    pub card_selected: Style,
    pub chat_user: Style,
    pub chat_assistant: Style,
    pub error: Style,
    pub success: Style,
    pub footer: Style,
    pub popup_title: Style,
    pub popup_border: Style,
    pub popup_text: Style,
}

const SKY: Color = Color::Rgb(14, 165, 233);
const INDIGO: Color = Color::Rgb(99, 102, 241);

impl Theme {
    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode { Self::dark() } else { Self::light() }
    }

    pub fn dark() -> Self {
        let text = Color::Rgb(226, 232, 240);
        let text_secondary = Color::Rgb(148, 163, 184);
        let root_bg = Color::Rgb(2, 6, 23);
        Self {
            root_bg,
            card_bg: Color::Rgb(15, 23, 42),
            focus_border: SKY,
            blurred_border: Color::Rgb(51, 65, 85),
            text,
            text_secondary,
            primary: SKY,
            accent: INDIGO,
            ..Self::shared(text, text_secondary, root_bg)
        }
    }

    pub fn light() -> Self {
        let text = Color::Rgb(15, 23, 42);
        let text_secondary = Color::Rgb(71, 85, 105);
        let root_bg = Color::Rgb(248, 250, 252);
        Self {
            root_bg,
            card_bg: Color::White,
            focus_border: SKY,
            blurred_border: Color::Rgb(203, 213, 225),
            text,
            text_secondary,
            primary: SKY,
            accent: INDIGO,
            ..Self::shared(text, text_secondary, root_bg)
        }
    }

    fn shared(text: Color, text_secondary: Color, root_bg: Color) -> Self {
        Self {
            root_bg,
            card_bg: root_bg,
            focus_border: SKY,
            blurred_border: text_secondary,
            text,
            text_secondary,
            primary: SKY,
            accent: INDIGO,

            nav_link: Style::default().fg(text_secondary),
            nav_active: Style::default().fg(SKY).add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            brand: Style::default().fg(text).add_modifier(Modifier::BOLD),
            heading: Style::default().fg(text).add_modifier(Modifier::BOLD),
            chip: Style::default().fg(text_secondary),
            chip_active: Style::default().fg(root_bg).bg(SKY).add_modifier(Modifier::BOLD),
            card_selected: Style::default().fg(SKY).add_modifier(Modifier::BOLD),
            chat_user: Style::default().fg(SKY).add_modifier(Modifier::BOLD),
            chat_assistant: Style::default().fg(INDIGO).add_modifier(Modifier::BOLD),
            error: Style::default().fg(Color::Rgb(239, 68, 68)),
            success: Style::default().fg(Color::Rgb(34, 197, 94)).add_modifier(Modifier::BOLD),
            footer: Style::default().fg(text_secondary).add_modifier(Modifier::DIM),
            popup_title: Style::default().fg(SKY).add_modifier(Modifier::BOLD),
            popup_border: Style::default().bg(root_bg),
            popup_text: Style::default().fg(text),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modes_differ_but_share_primary() {
        let dark = Theme::for_mode(true);
        let light = Theme::for_mode(false);
        assert_ne!(dark.root_bg, light.root_bg);
        assert_eq!(dark.primary, light.primary);
    }
}
