//! Integration tests for the draw contract: the widget issues one fill and
//! one text run per visible row plus indicator icons gated on scrollability,
//! all forwarded verbatim to the host surface.

use dropui_core::geometry::Rect;
use dropui_core::metrics::CellMetrics;
use dropui_core::surface::{DrawSurface, IndicatorIcon, RowFill};
use dropui_widgets::{Dropdown, ITEM_PADDING};

#[derive(Debug, Clone, PartialEq)]
enum DrawCall {
    Fill(Rect, RowFill, f32),
    Text(u16, u16, String, f32),
    Icon(Rect, IndicatorIcon, f32),
}

#[derive(Debug, Default)]
struct RecordingSurface {
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    fn fills(&self) -> Vec<(Rect, RowFill)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Fill(rect, fill, _) => Some((*rect, *fill)),
                _ => None,
            })
            .collect()
    }

    fn icons(&self) -> Vec<IndicatorIcon> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Icon(_, icon, _) => Some(*icon),
                _ => None,
            })
            .collect()
    }

    fn texts(&self) -> Vec<(u16, u16, String)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text(x, y, text, _) => Some((*x, *y, text.clone())),
                _ => None,
            })
            .collect()
    }
}

impl DrawSurface for RecordingSurface {
    fn fill_rect(&mut self, rect: Rect, fill: RowFill, opacity: f32) {
        self.calls.push(DrawCall::Fill(rect, fill, opacity));
    }

    fn draw_text(&mut self, x: u16, y: u16, text: &str, opacity: f32) {
        self.calls.push(DrawCall::Text(x, y, text.to_string(), opacity));
    }

    fn draw_icon(&mut self, rect: Rect, icon: IndicatorIcon, opacity: f32) {
        self.calls.push(DrawCall::Icon(rect, icon, opacity));
    }
}

fn dropdown(count: usize, page: u16) -> Dropdown<String> {
    let values: Vec<String> = (0..count).map(|i| format!("entry {i}")).collect();
    let initial = values[0].clone();
    Dropdown::new(values, &initial, |v| v.clone(), 30, 20, page, &CellMetrics)
}

#[test]
fn one_fill_and_one_text_per_visible_row() {
    let dd = dropdown(10, 4);
    let mut surface = RecordingSurface::default();
    dd.draw(&mut surface, None, 1.0);

    let fills = surface.fills();
    let texts = surface.texts();
    assert_eq!(fills.len(), 4);
    assert_eq!(texts.len(), 4);

    for (slot, (x, y, text)) in texts.iter().enumerate() {
        let (item, region) = dd.visible_items().nth(slot).unwrap();
        assert_eq!(text, item.label());
        assert_eq!(*x, region.x + ITEM_PADDING);
        assert_eq!(*y, region.y);
    }
}

#[test]
fn selected_row_uses_selected_fill() {
    let mut dd = dropdown(10, 4);
    assert!(dd.select_value(&"entry 2".to_string()));
    let mut surface = RecordingSurface::default();
    dd.draw(&mut surface, None, 1.0);

    let fills = surface.fills();
    assert_eq!(fills[2].1, RowFill::Selected);
    for (slot, (_, fill)) in fills.iter().enumerate() {
        if slot != 2 {
            assert_eq!(*fill, RowFill::Inactive);
        }
    }
}

#[test]
fn pointer_inside_row_hovers_it_unless_selected() {
    let dd = dropdown(10, 4);
    let (_, hovered_region) = dd.visible_items().nth(1).unwrap();
    let mut surface = RecordingSurface::default();
    dd.draw(
        &mut surface,
        Some((hovered_region.x + 1, hovered_region.y)),
        1.0,
    );

    let fills = surface.fills();
    assert_eq!(fills[0].1, RowFill::Selected); // initial selection is row 0
    assert_eq!(fills[1].1, RowFill::Hovered);
    assert_eq!(fills[2].1, RowFill::Inactive);
}

#[test]
fn indicators_follow_scrollability() {
    let mut dd = dropdown(10, 4);
    let mut surface = RecordingSurface::default();
    dd.draw(&mut surface, None, 1.0);
    assert_eq!(surface.icons(), vec![IndicatorIcon::Down]);

    dd.scroll_by(3);
    let mut surface = RecordingSurface::default();
    dd.draw(&mut surface, None, 1.0);
    assert_eq!(surface.icons(), vec![IndicatorIcon::Up, IndicatorIcon::Down]);

    dd.scroll_by(3);
    let mut surface = RecordingSurface::default();
    dd.draw(&mut surface, None, 1.0);
    assert_eq!(surface.icons(), vec![IndicatorIcon::Up]);
}

#[test]
fn all_items_fitting_draws_no_indicators() {
    let dd = dropdown(3, 10);
    let mut surface = RecordingSurface::default();
    dd.draw(&mut surface, None, 1.0);
    assert!(surface.icons().is_empty());
    assert_eq!(surface.fills().len(), 3);
}

#[test]
fn opacity_passes_through_every_call() {
    let dd = dropdown(10, 4);
    let mut surface = RecordingSurface::default();
    dd.draw(&mut surface, None, 0.25);
    assert!(!surface.calls.is_empty());
    for call in &surface.calls {
        let opacity = match call {
            DrawCall::Fill(_, _, o) | DrawCall::Icon(_, _, o) => *o,
            DrawCall::Text(_, _, _, o) => *o,
        };
        assert_eq!(opacity, 0.25);
    }
}

#[test]
fn empty_window_draws_no_rows() {
    // Zero height: page size is 0, so no fills or text runs. The down
    // indicator still satisfies its derived visibility condition
    // (first_visible < max_first_visible) and is the only draw issued.
    let dd = dropdown(5, 0);
    let mut surface = RecordingSurface::default();
    dd.draw(&mut surface, None, 1.0);
    assert!(surface.fills().is_empty());
    assert!(surface.texts().is_empty());
    assert_eq!(surface.icons(), vec![IndicatorIcon::Down]);
}
