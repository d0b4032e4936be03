//! User menu popup
//!
//! Drawn below the trigger while the menu is open. Lists the menu entries by
//! their accessible labels.

use mealprep_app::user_menu::{UserMenuItem, UserMenuState};
use mealprep_core::Icon;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::layout::user_menu_item_rect;
use crate::theme::{icons::IconSet, styles};

use super::overlay::lift;

pub struct UserMenuPopup<'a> {
    menu: &'a UserMenuState,
    icons: IconSet,
}

impl<'a> UserMenuPopup<'a> {
    pub fn new(menu: &'a UserMenuState, icons: IconSet) -> Self {
        Self { menu, icons }
    }

    fn icon(item: UserMenuItem) -> Icon {
        match item {
            UserMenuItem::Settings => Icon::Settings,
            UserMenuItem::LogOut => Icon::LogOut,
        }
    }
}

impl Widget for UserMenuPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        lift(buf, area);
        styles::popup_block().render(area, buf);

        let highlighted = self.menu.highlighted_item();
        for (index, item) in UserMenuItem::ALL.iter().enumerate() {
            let Some(row) = user_menu_item_rect(area, index) else {
                break;
            };
            let style = if *item == highlighted {
                styles::focused_selected()
            } else {
                styles::text_primary()
            };
            Line::from(Span::styled(
                format!(
                    "{} {}",
                    self.icons.glyph(Self::icon(*item)),
                    item.accessible_label()
                ),
                style,
            ))
            .render(row, buf);
        }
    }
}
