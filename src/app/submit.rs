//! Submission flow: validate the form, append the entry to the store, and
//! drive the success popup + thank-you screen.

use super::*;

impl<'a> App<'a> {
    /// Validates and submits the current form. A re-entrancy guard keeps
    /// queued events (double-clicks on the button, key repeat on Ctrl+S)
    /// from writing the entry twice.
    pub(super) fn submit(&mut self) {
        if self.submitting {
            return;
        }

        let name = self.name();
        let comment = self.comment();
        let avatar = self.carousel.active_index();

        // The active index is maintained in [1, N]; 0 would mean the
        // selector never ran, which the store must not see.
        let total = self.carousel.buffer().card_count();
        if name.is_empty() || comment.is_empty() || avatar == 0 || avatar > total {
            self.popup = Some(Popup::error("Please fill in every field first."));
            return;
        }

        self.submitting = true;
        let entry = Entry::new(name, avatar, comment);
        match self.store.append(&entry) {
            Ok(()) => {
                self.entry_count += 1;
                self.last_entry = Some(entry);
                self.screen = Screen::ThankYou;
                self.popup = Some(Popup::success(
                    "Thank You",
                    "For Your Participation!",
                    SUCCESS_POPUP_DURATION,
                ));
                self.set_status("Entry saved");
            }
            Err(e) => {
                self.popup = Some(Popup::error(&format!("Could not save your entry: {}", e)));
            }
        }
        self.submitting = false;
    }
}
