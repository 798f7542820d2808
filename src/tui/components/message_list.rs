//! # MessageList Component
//!
//! Scrollable view of the conversation.
//!
//! ## Responsibilities
//!
//! - Display the mock conversation in order
//! - Manual scrolling (arrows, page keys, mouse wheel)
//! - Layout caching (entry heights only change with the width)
//!
//! There is no stick-to-bottom behavior: the view opens at the top and only
//! moves when the user scrolls.
//!
//! ## Architecture
//!
//! `MessageList` is a transient component (created each frame) that wraps
//! `&'a mut MessageListState` (persistent state). The messages themselves are
//! loaded once when the state is created, i.e. when the chat page mounts.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::mock;
use crate::core::model::Message;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::message::{COMPACT_BUBBLE_PERCENT, MessageEntry, WIDE_BUBBLE_PERCENT};
use crate::tui::event::TuiEvent;

/// Blank rows after every entry.
const ENTRY_GAP: u16 = 1;
/// Columns kept free on each side of the entries.
const SIDE_PADDING: u16 = 1;

/// Layout and scroll state for the message list.
/// Must be persisted in the parent page state.
pub struct MessageListState {
    pub messages: Vec<Message>,
    /// Scroll offset and view state
    pub scroll_state: ScrollViewState,
    /// Cached layout measurements
    pub layout: LayoutCache,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
}

impl Default for MessageListState {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageListState {
    pub fn new() -> Self {
        Self {
            messages: mock::messages(),
            scroll_state: ScrollViewState::default(),
            layout: LayoutCache::new(),
            viewport_height: 0,
        }
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.layout.total_height().saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

/// Scrollable conversation view component.
/// Created fresh each frame with a reference to its state.
pub struct MessageList<'a> {
    pub state: &'a mut MessageListState,
    /// Prop: compact layout allows wider bubbles
    pub compact: bool,
}

impl<'a> MessageList<'a> {
    pub fn new(state: &'a mut MessageListState, compact: bool) -> Self {
        Self { state, compact }
    }

    fn bubble_percent(&self) -> u16 {
        if self.compact {
            COMPACT_BUBBLE_PERCENT
        } else {
            WIDE_BUBBLE_PERCENT
        }
    }
}

impl<'a> Component for MessageList<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar safe area
        let entry_width = content_width.saturating_sub(SIDE_PADDING * 2);
        let percent = self.bubble_percent();

        // 1. Update layout cache
        self.state
            .layout
            .ensure(&self.state.messages, entry_width, percent);

        // 2. Clamp scroll offset to prevent overscrolling past content
        self.state.viewport_height = area.height;
        self.state.clamp_scroll();

        // 3. Render entries into a ScrollView
        let total_height = self.state.layout.total_height();
        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset = 0u16;
        for (message, &height) in self.state.messages.iter().zip(&self.state.layout.heights) {
            let entry_rect = Rect::new(
                SIDE_PADDING,
                y_offset,
                entry_width,
                height.saturating_sub(ENTRY_GAP),
            );
            scroll_view.render_widget(MessageEntry::new(message, percent), entry_rect);
            y_offset += height;
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

/// EventHandler is implemented on `MessageListState` because `MessageList`
/// is recreated every frame and cannot hold the scroll position.
impl EventHandler for MessageListState {
    type Event = (); // scrolling is handled internally

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.clamp_scroll();
            }
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.clamp_scroll();
            }
            _ => {}
        }
        None
    }
}

/// Cached layout measurements
pub struct LayoutCache {
    /// Entry heights, gap included
    pub heights: Vec<u16>,
    width: u16,
    percent: u16,
}

impl Default for LayoutCache {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutCache {
    pub fn new() -> Self {
        Self {
            heights: Vec::new(),
            width: 0,
            percent: 0,
        }
    }

    /// Recompute heights if the width, bubble cap or message count changed.
    pub fn ensure(&mut self, messages: &[Message], width: u16, percent: u16) {
        if self.width == width && self.percent == percent && self.heights.len() == messages.len() {
            return;
        }
        self.heights = messages
            .iter()
            .map(|m| MessageEntry::calculate_height(m, width, percent) + ENTRY_GAP)
            .collect();
        self.width = width;
        self.percent = percent;
    }

    pub fn total_height(&self) -> u16 {
        self.heights.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{count_text, find_text, render};

    struct Harness {
        state: MessageListState,
        compact: bool,
    }

    impl Component for Harness {
        fn render(&mut self, frame: &mut Frame, area: Rect) {
            MessageList::new(&mut self.state, self.compact).render(frame, area);
        }
    }

    fn harness() -> Harness {
        Harness {
            state: MessageListState::new(),
            compact: false,
        }
    }

    #[test]
    fn renders_four_entries_in_order() {
        let mut list = harness();
        let buffer = render(&mut list, 120, 30);

        // one rounded top-left corner per bubble
        assert_eq!(count_text(&buffer, "╭"), 4);

        let (_, r1) = find_text(&buffer, "Hello! I'm Alice").unwrap();
        let (_, r2) = find_text(&buffer, "Hi Alice! Can you").unwrap();
        let (_, r3) = find_text(&buffer, "I'm characterized").unwrap();
        let (_, r4) = find_text(&buffer, "That's interesting!").unwrap();
        assert!(r1 < r2 && r2 < r3 && r3 < r4);
    }

    #[test]
    fn user_entries_right_ai_entries_left() {
        let mut list = harness();
        let buffer = render(&mut list, 120, 30);

        let (c1, _) = find_text(&buffer, "Hello! I'm Alice").unwrap();
        let (c2, _) = find_text(&buffer, "Hi Alice! Can you").unwrap();
        let (c3, _) = find_text(&buffer, "I'm characterized").unwrap();
        let (c4, _) = find_text(&buffer, "That's interesting!").unwrap();

        assert!(c1 < 10 && c3 < 10, "ai messages hug the left edge");
        assert!(c2 > 50 && c4 > 50, "user messages hug the right edge");
    }

    #[test]
    fn layout_cache_recomputes_on_width_change() {
        let messages = mock::messages();
        let mut cache = LayoutCache::new();
        cache.ensure(&messages, 100, WIDE_BUBBLE_PERCENT);
        let wide_total = cache.total_height();
        assert_eq!(cache.heights.len(), 4);

        cache.ensure(&messages, 30, WIDE_BUBBLE_PERCENT);
        assert!(cache.total_height() > wide_total);
    }

    #[test]
    fn scroll_is_clamped_to_content() {
        let mut list = harness();
        // Tiny viewport forces scrolling
        render(&mut list, 60, 6);

        for _ in 0..200 {
            list.state.handle_event(&TuiEvent::ScrollDown);
        }
        let max_y = list.state.layout.total_height() - list.state.viewport_height;
        assert_eq!(list.state.scroll_state.offset().y, max_y);

        list.state.handle_event(&TuiEvent::ScrollUp);
        assert_eq!(list.state.scroll_state.offset().y, max_y - 1);
    }

    #[test]
    fn opens_at_top_without_autoscroll() {
        let mut list = harness();
        render(&mut list, 60, 6);
        assert_eq!(list.state.scroll_state.offset().y, 0);
    }

    #[test]
    fn compact_uses_wider_bubbles() {
        let mut list = harness();
        list.compact = true;
        let compact = render(&mut list, 60, 40);
        let mut wide_list = harness();
        let wide = render(&mut wide_list, 60, 40);

        // The long AI message needs fewer rows with the wider cap
        let rows = |b: &ratatui::buffer::Buffer| find_text(b, "That's interesting!").unwrap().1;
        assert!(rows(&compact) <= rows(&wide));
    }
}
