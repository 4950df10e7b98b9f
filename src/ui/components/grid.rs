// SPDX-License-Identifier: MPL-2.0
//! Card grid that wraps after a column count chosen from the width.

use crate::ui::design_tokens::spacing;
use iced::widget::{Column, Row};
use iced::{Element, Length};

/// Columns that fit in `available` width with items of `item_width`,
/// between 1 and `max`.
#[must_use]
pub fn columns_for(available: f32, item_width: f32, max: usize) -> usize {
    if item_width <= 0.0 || max == 0 {
        return 1;
    }
    let fit = ((available + spacing::LG) / (item_width + spacing::LG)).floor();
    (fit.max(1.0) as usize).min(max)
}

/// Lays `items` out in rows of `columns`.
pub fn grid<'a, Message: 'a>(
    items: Vec<Element<'a, Message>>,
    columns: usize,
) -> Element<'a, Message> {
    let columns = columns.max(1);
    let mut rows = Column::new().spacing(spacing::LG).width(Length::Shrink);
    let mut row = Row::new().spacing(spacing::LG);
    let mut in_row = 0;

    for item in items {
        row = row.push(item);
        in_row += 1;
        if in_row == columns {
            rows = rows.push(row);
            row = Row::new().spacing(spacing::LG);
            in_row = 0;
        }
    }
    if in_row > 0 {
        rows = rows.push(row);
    }
    rows.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_shrink_with_width() {
        assert_eq!(columns_for(1200.0, 340.0, 3), 3);
        assert_eq!(columns_for(760.0, 340.0, 3), 2);
        assert_eq!(columns_for(200.0, 340.0, 3), 1);
    }

    #[test]
    fn degenerate_inputs_give_one_column() {
        assert_eq!(columns_for(1000.0, 0.0, 3), 1);
        assert_eq!(columns_for(1000.0, 100.0, 0), 1);
    }
}
