//! UI module for rendering the TUI

mod fashion;
mod forms;
mod header;
mod hero;
mod layout;
mod navigation;
mod young_favourite;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (header_area, sidebar_area, main_area) = layout::create_layout(area);

    header::draw(frame, header_area, app);
    layout::draw_sidebar(frame, sidebar_area, app);

    match app.state.current_view {
        View::Hero => hero::draw(frame, main_area, app),
        View::Fashion => fashion::draw(frame, main_area, app),
        View::YoungFavourite => young_favourite::draw(frame, main_area, app),
        View::CompanyDetails => forms::draw_company_details(frame, main_area, app),
        View::Navigation => navigation::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, app);
}
