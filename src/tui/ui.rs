use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::NavBar;
use crate::tui::{Page, TuiState};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [page_area, nav_area] = Layout::vertical([Min(0), Length(1)]).areas(frame.area());

    match &mut tui.page {
        Page::Home(page) => page.render(frame, page_area),
        Page::Login(page) => page.render(frame, page_area),
        Page::Chat(page) => page.render(frame, page_area),
    }

    NavBar::new(app.route, app.can_go_back()).render(frame, nav_area);
}
