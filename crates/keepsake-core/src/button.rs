//! Favorite button controller.
//!
//! One controller per bound control. The steady-state rendering is a pure
//! function of the lesson's membership in the favorites collection; the
//! only other visual is the transient confirmation shown right after an
//! activation, reverted by a per-controller timer. Activating again while
//! the timer is armed replaces it, so the label can never go stale.

use keepsake_store::Storage;

use crate::control::Control;
use crate::state::FavoritesState;

/// Attribute carrying the lesson id on a bindable control.
pub const LESSON_ATTR: &str = "data-lesson";

/// How long the transient confirmation stays up.
pub const FEEDBACK_DURATION_MS: u32 = 1500;

/// Class set on the control while it is favorited.
pub const FAVORITED_CLASS: &str = "favorited";

/// Feedback background classes (added / removed confirmation).
pub const FEEDBACK_ADDED_CLASS: &str = "feedback-added";
pub const FEEDBACK_REMOVED_CLASS: &str = "feedback-removed";

/// Controller for one favorite control.
#[derive(Debug)]
pub struct FavoriteButton {
    lesson_id: String,
    /// Armed revert timer, replaced on every activation.
    pending_revert: Option<u32>,
}

impl FavoriteButton {
    /// Bind a controller to `control`.
    ///
    /// The lesson id is read from the control's `data-lesson` attribute;
    /// a control without one is skipped with a warning. On success the
    /// control is rendered in its steady state.
    pub fn bind<S: Storage>(control: &mut Control, state: &FavoritesState<S>) -> Option<Self> {
        let id = match control.attr(LESSON_ATTR) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => {
                log::warn!("favorite control has no {LESSON_ATTR} attribute, not binding");
                return None;
            },
        };
        let button = Self {
            lesson_id: id,
            pending_revert: None,
        };
        button.sync(control, state);
        Some(button)
    }

    /// The lesson this controller toggles.
    pub fn lesson_id(&self) -> &str {
        &self.lesson_id
    }

    /// Whether a revert timer is currently armed.
    pub fn has_pending_revert(&self) -> bool {
        self.pending_revert.is_some()
    }

    /// Handle a user activation: toggle membership, show the
    /// confirmation, and (re)arm the revert timer. Returns the new
    /// membership.
    pub fn activate<S: Storage>(
        &mut self,
        control: &mut Control,
        state: &mut FavoritesState<S>,
    ) -> bool {
        let now_favorited = state.toggle(&self.lesson_id);
        control.set_class(FAVORITED_CLASS, now_favorited);
        control.set_class(FEEDBACK_ADDED_CLASS, now_favorited);
        control.set_class(FEEDBACK_REMOVED_CLASS, !now_favorited);
        control.set_html(feedback_html(now_favorited));
        // Replaces any timer still armed from a previous activation.
        self.pending_revert = Some(FEEDBACK_DURATION_MS);
        now_favorited
    }

    /// Advance the revert timer by `dt_ms`, reverting to the steady
    /// state once the confirmation window has fully elapsed.
    pub fn tick<S: Storage>(
        &mut self,
        control: &mut Control,
        state: &FavoritesState<S>,
        dt_ms: u32,
    ) {
        let Some(remaining) = self.pending_revert else {
            return;
        };
        if dt_ms >= remaining {
            self.pending_revert = None;
            control.remove_class(FEEDBACK_ADDED_CLASS);
            control.remove_class(FEEDBACK_REMOVED_CLASS);
            self.sync(control, state);
        } else {
            self.pending_revert = Some(remaining - dt_ms);
        }
    }

    /// Render the steady state from current membership.
    fn sync<S: Storage>(&self, control: &mut Control, state: &FavoritesState<S>) {
        let favorited = state.contains(&self.lesson_id);
        control.set_class(FAVORITED_CLASS, favorited);
        control.set_html(steady_html(favorited));
    }
}

fn steady_html(favorited: bool) -> String {
    if favorited {
        "<span class=\"heart-icon\">\u{2665}</span> Remove from Favorites".to_string()
    } else {
        "<span class=\"heart-icon\">\u{2661}</span> Add to Favorites".to_string()
    }
}

fn feedback_html(added: bool) -> String {
    if added {
        "<span class=\"heart-icon\">\u{2665}</span> Added to Favorites!".to_string()
    } else {
        "<span class=\"heart-icon\">\u{2661}</span> Removed from Favorites!".to_string()
    }
}
