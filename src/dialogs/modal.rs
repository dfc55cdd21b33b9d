//! Modal dialog shell - centered window over a dimmed backdrop.
//!
//! The backdrop dismisses the dialog on click, but not on drag: users
//! often press on the backdrop to move the window or select text and end
//! up releasing there. A press/release pair counts as a click only while
//! the pointer stays within [`CLICK_SLOP_SQ`] of where it went down, and
//! the press origin lives exactly as long as one interaction.

use eframe::egui::{self, Pos2};

/// Squared pointer travel below which press+release is a click (px²).
pub const CLICK_SLOP_SQ: f32 = 25.0;

/// True when the pointer stayed within the slop between press and release.
pub fn is_click(press: Pos2, release: Pos2) -> bool {
    (release - press).length_sq() < CLICK_SLOP_SQ
}

/// Reusable chrome for modal dialogs.
pub struct ModalShell {
    title: String,
    default_size: [f32; 2],
    /// Where the current backdrop press started; None between interactions.
    press_origin: Option<Pos2>,
}

impl ModalShell {
    pub fn new(title: impl Into<String>, default_size: [f32; 2]) -> Self {
        Self {
            title: title.into(),
            default_size,
            press_origin: None,
        }
    }

    /// Record where a backdrop press started.
    pub fn on_press(&mut self, pos: Pos2) {
        self.press_origin = Some(pos);
    }

    /// Resolve the interaction at release. True means the pair was a
    /// click. The origin is consumed either way, so a release without a
    /// matching backdrop press never dismisses.
    pub fn on_release(&mut self, pos: Pos2) -> bool {
        match self.press_origin.take() {
            Some(origin) => is_click(origin, pos),
            None => false,
        }
    }

    /// Show the dialog while `*open`. Clears `*open` when the user closes
    /// the window or clicks the backdrop. Returns the content's result.
    pub fn show<R>(
        &mut self,
        ctx: &egui::Context,
        open: &mut bool,
        add_contents: impl FnOnce(&mut egui::Ui) -> R,
    ) -> Option<R> {
        if !*open {
            self.press_origin = None;
            return None;
        }

        let screen = ctx.input(|i| i.viewport_rect());

        // Dimmed backdrop below the window. Hover is false wherever the
        // window covers it, which gates press tracking to the backdrop.
        let mut backdrop_hovered = false;
        egui::Area::new(egui::Id::new(("modal_backdrop", self.title.as_str())))
            .order(egui::Order::Middle)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                let response = ui.allocate_rect(screen, egui::Sense::hover());
                ui.painter().rect_filled(screen, 0.0, egui::Color32::from_black_alpha(128));
                backdrop_hovered = response.hovered();
            });

        let mut dismissed = false;
        ctx.input(|i| {
            if i.pointer.primary_pressed()
                && backdrop_hovered
                && let Some(pos) = i.pointer.interact_pos()
            {
                self.on_press(pos);
            }
            if i.pointer.primary_released() {
                dismissed = match i.pointer.interact_pos() {
                    Some(pos) => self.on_release(pos),
                    None => {
                        self.press_origin = None;
                        false
                    }
                };
            }
        });

        let mut window_open = true;
        let result = egui::Window::new(&self.title)
            .id(egui::Id::new(("modal_window", self.title.as_str())))
            .open(&mut window_open)
            .pivot(egui::Align2::CENTER_CENTER)
            .default_pos(screen.center())
            .default_size(self.default_size)
            .min_size([400.0, 100.0])
            .resizable(true)
            .collapsible(false)
            .show(ctx, |ui| add_contents(ui))
            .and_then(|inner| inner.inner);

        if dismissed || !window_open {
            *open = false;
            self.press_origin = None;
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::pos2;

    #[test]
    fn test_click_within_slop_dismisses() {
        let mut shell = ModalShell::new("Preview", [500.0, 300.0]);
        shell.on_press(pos2(100.0, 100.0));
        // 3² + 3² = 18 px²
        assert!(shell.on_release(pos2(103.0, 103.0)));
    }

    #[test]
    fn test_travel_at_slop_boundary_is_a_drag() {
        let mut shell = ModalShell::new("Preview", [500.0, 300.0]);
        // 3² + 4² = 25 px², not strictly inside
        shell.on_press(pos2(100.0, 100.0));
        assert!(!shell.on_release(pos2(103.0, 104.0)));

        shell.on_press(pos2(100.0, 100.0));
        assert!(!shell.on_release(pos2(140.0, 100.0)));
    }

    #[test]
    fn test_release_without_press_is_ignored() {
        let mut shell = ModalShell::new("Preview", [500.0, 300.0]);
        assert!(!shell.on_release(pos2(10.0, 10.0)));
    }

    #[test]
    fn test_press_origin_lives_for_one_interaction() {
        let mut shell = ModalShell::new("Preview", [500.0, 300.0]);

        shell.on_press(pos2(50.0, 50.0));
        assert!(shell.on_release(pos2(50.0, 50.0)));
        // consumed: a second release has nothing to match against
        assert!(!shell.on_release(pos2(50.0, 50.0)));

        // each press measures from its own origin
        shell.on_press(pos2(0.0, 0.0));
        assert!(!shell.on_release(pos2(100.0, 100.0)));
        shell.on_press(pos2(100.0, 100.0));
        assert!(shell.on_release(pos2(101.0, 101.0)));
    }
}
