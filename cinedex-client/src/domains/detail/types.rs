//! Detail domain state and the synopsis expansion machine.

use std::borrow::Cow;
use std::time::Duration;

use cinedex_model::{MovieDetails, MovieId};

/// Lifecycle of the detail screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailPhase {
    /// Nothing requested yet.
    #[default]
    Empty,
    /// Fetch outstanding for this movie; the screen shows a loading
    /// placeholder and no other state is readable.
    Loading(MovieId),
    /// Record loaded; the synopsis toggle becomes available.
    Loaded(MovieDetails),
    /// Fetch failed; the reason is shown with a retry affordance.
    Failed(String),
}

/// Detail screen state.
#[derive(Debug, Clone, Default)]
pub struct DetailState {
    pub phase: DetailPhase,
    /// Synopsis expansion, meaningful only once loaded. Lifecycle is
    /// scoped to one mount; `Mounted` resets it.
    pub overview: OverviewExpansion,
    /// Latest height transition for the presentation layer to run.
    pub transition: Option<HeightTransition>,
}

impl DetailState {
    pub fn details(&self) -> Option<&MovieDetails> {
        match &self.phase {
            DetailPhase::Loaded(details) => Some(details),
            _ => None,
        }
    }
}

/// Expand/collapse state for the synopsis block.
///
/// The controller tracks only the discrete flag and a target display
/// height estimated from the text that will be shown; interpolating
/// between heights over time belongs to the presentation layer (see
/// [`HeightTransition`]). The estimate is deliberately decoupled from
/// real text layout: a fixed line height and a fixed characters-per-
/// line count, rounded up to whole lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverviewExpansion {
    expanded: bool,
    target_height: f32,
}

impl Default for OverviewExpansion {
    fn default() -> Self {
        Self {
            expanded: false,
            target_height: 0.0,
        }
    }
}

impl OverviewExpansion {
    /// Collapsed synopses show this many leading chars plus an
    /// ellipsis.
    pub const COLLAPSE_LIMIT: usize = 100;
    const ELLIPSIS: &'static str = "...";
    /// Display height of one estimated text line.
    pub const LINE_HEIGHT: f32 = 24.0;
    /// Estimated chars per rendered line.
    pub const CHARS_PER_LINE: usize = 50;
    /// Duration of the expand/collapse transition.
    pub const TRANSITION_DURATION: Duration = Duration::from_millis(300);

    pub fn expanded(&self) -> bool {
        self.expanded
    }

    /// Current target display height for the synopsis block.
    pub fn target_height(&self) -> f32 {
        self.target_height
    }

    /// The synopsis text that will be shown: the full overview when
    /// expanded, else the first [`Self::COLLAPSE_LIMIT`] chars plus an
    /// ellipsis.
    pub fn display_text<'a>(&self, overview: &'a str) -> Cow<'a, str> {
        if self.expanded {
            Cow::Borrowed(overview)
        } else {
            let mut truncated: String =
                overview.chars().take(Self::COLLAPSE_LIMIT).collect();
            truncated.push_str(Self::ELLIPSIS);
            Cow::Owned(truncated)
        }
    }

    /// Estimated display height for a text of `char_count` chars.
    pub fn estimated_height(char_count: usize) -> f32 {
        let lines = char_count.div_ceil(Self::CHARS_PER_LINE);
        lines as f32 * Self::LINE_HEIGHT
    }

    /// Flip the expansion flag and recompute the target height from
    /// the text that will now be shown.
    pub fn toggle(&mut self, overview: &str) -> HeightTransition {
        self.expanded = !self.expanded;
        self.retarget(overview)
    }

    /// Recompute the target height without flipping. Used on initial
    /// load, where the block animates up from zero.
    pub fn retarget(&mut self, overview: &str) -> HeightTransition {
        let from = self.target_height;
        let shown = self.display_text(overview);
        self.target_height = Self::estimated_height(shown.chars().count());
        HeightTransition {
            from,
            to: self.target_height,
            duration: Self::TRANSITION_DURATION,
        }
    }
}

/// A linear height transition for the presentation layer to drive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightTransition {
    pub from: f32,
    pub to: f32,
    pub duration: Duration,
}

impl HeightTransition {
    /// Interpolated height at `elapsed`, clamped to the endpoints.
    pub fn height_at(&self, elapsed: Duration) -> f32 {
        if elapsed >= self.duration || self.duration.is_zero() {
            return self.to;
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapsed_text_is_first_100_chars_plus_ellipsis() {
        let overview = "x".repeat(150);
        let expansion = OverviewExpansion::default();
        let shown = expansion.display_text(&overview);
        assert_eq!(shown.chars().count(), 103);
        assert!(shown.ends_with("..."));
    }

    #[test]
    fn truncation_counts_chars_not_bytes() {
        // 150 two-byte chars; byte slicing at 100 would split a char.
        let overview = "é".repeat(150);
        let expansion = OverviewExpansion::default();
        let shown = expansion.display_text(&overview);
        assert_eq!(shown.chars().count(), 103);
    }

    #[test]
    fn equal_line_counts_for_150_char_overview() {
        // 103 collapsed chars and 150 expanded chars both round up to
        // 3 lines of 24.
        let overview = "x".repeat(150);
        let mut expansion = OverviewExpansion::default();
        let initial = expansion.retarget(&overview);
        assert_eq!(initial.from, 0.0);
        assert_eq!(initial.to, 72.0);

        let expand = expansion.toggle(&overview);
        assert_eq!(expand.from, 72.0);
        assert_eq!(expand.to, 72.0);
        assert!(expansion.expanded());
    }

    #[test]
    fn double_toggle_restores_flag_and_height() {
        let overview = "x".repeat(320);
        let mut expansion = OverviewExpansion::default();
        expansion.retarget(&overview);
        let collapsed_height = expansion.target_height();

        expansion.toggle(&overview);
        assert!(expansion.expanded());
        assert_eq!(expansion.target_height(), 168.0); // ceil(320/50) * 24

        expansion.toggle(&overview);
        assert!(!expansion.expanded());
        assert_eq!(expansion.target_height(), collapsed_height);
    }

    #[test]
    fn short_overview_still_gets_ellipsis() {
        // The ellipsis is appended whenever collapsed, even for
        // overviews under the limit.
        let expansion = OverviewExpansion::default();
        assert_eq!(expansion.display_text("Brief."), "Brief....");
        assert_eq!(OverviewExpansion::estimated_height(0), 0.0);
        assert_eq!(OverviewExpansion::estimated_height(3), 24.0);
    }

    #[test]
    fn transition_interpolates_linearly_and_clamps() {
        let transition = HeightTransition {
            from: 0.0,
            to: 72.0,
            duration: Duration::from_millis(300),
        };
        assert_eq!(transition.height_at(Duration::ZERO), 0.0);
        assert_eq!(transition.height_at(Duration::from_millis(150)), 36.0);
        assert_eq!(transition.height_at(Duration::from_millis(300)), 72.0);
        assert_eq!(transition.height_at(Duration::from_millis(900)), 72.0);
    }
}
