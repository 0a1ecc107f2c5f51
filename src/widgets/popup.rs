use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Center a `width` x `height` box inside `area`, clamped to fit
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);

    Rect {
        x: area.x + (area.width - popup_width) / 2,
        y: area.y + (area.height - popup_height) / 2,
        width: popup_width,
        height: popup_height,
    }
}

pub fn inset_rect(area: Rect, horizontal_margin: u16, vertical_margin: u16) -> Rect {
    let width = area.width.saturating_sub(horizontal_margin * 2);
    let height = area.height.saturating_sub(vertical_margin * 2);
    Rect {
        x: area.x + horizontal_margin.min(area.width / 2),
        y: area.y + vertical_margin.min(area.height / 2),
        width,
        height,
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}
