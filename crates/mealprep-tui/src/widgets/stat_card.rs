//! Stat card widget
//!
//! Label plus value, colored by the card variant. Collapses to a single
//! `label: value` row when only one inner row is available.

use mealprep_app::dashboard::StatDescriptor;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{icons::IconSet, styles};

pub struct StatCard<'a> {
    stat: &'a StatDescriptor,
    icons: IconSet,
}

impl<'a> StatCard<'a> {
    pub fn new(stat: &'a StatDescriptor, icons: IconSet) -> Self {
        Self { stat, icons }
    }
}

impl Widget for StatCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let icon = Span::styled(
            format!("{} ", self.icons.glyph(self.stat.icon)),
            styles::stat_variant(self.stat.variant),
        );
        let value = Span::styled(self.stat.value.clone(), styles::stat_variant(self.stat.variant));

        if inner.height == 1 {
            Line::from(vec![
                icon,
                Span::styled(format!("{}: ", self.stat.label), styles::text_secondary()),
                value,
            ])
            .render(inner, buf);
            return;
        }

        Line::from(vec![
            icon,
            Span::styled(self.stat.label, styles::text_secondary()),
        ])
        .render(Rect { height: 1, ..inner }, buf);
        Line::from(value).render(
            Rect {
                y: inner.y + 1,
                height: 1,
                ..inner
            },
            buf,
        );
    }
}
