//! Mediator: the dialog owns its widgets and centralizes the reaction
//! logic, so the widgets never talk to each other directly. Every mutation
//! goes through a dialog method that re-runs the routing.

// =============================================================================
// Widgets
// =============================================================================

#[derive(Default)]
pub struct ListBox {
    selection: Option<String>,
}

impl ListBox {
    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }
}

#[derive(Default)]
pub struct TextBox {
    content: String,
}

impl TextBox {
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

#[derive(Default)]
pub struct PushButton {
    enabled: bool,
}

impl PushButton {
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[derive(Default)]
pub struct CheckBox {
    checked: bool,
}

impl CheckBox {
    pub fn is_checked(&self) -> bool {
        self.checked
    }
}

// =============================================================================
// Articles dialog: selecting an article fills the title box
// =============================================================================

#[derive(Default)]
pub struct ArticlesDialog {
    pub list_box: ListBox,
    pub title_box: TextBox,
    pub save_button: PushButton,
}

impl ArticlesDialog {
    pub fn select_article(&mut self, title: &str) {
        self.list_box.selection = Some(title.to_string());
        self.title_box.content = title.to_string();
        self.save_button.enabled = true;
    }

    pub fn edit_title(&mut self, content: &str) {
        self.title_box.content = content.to_string();
        self.save_button.enabled = !self.title_box.is_empty();
    }
}

// =============================================================================
// Sign-up dialog: button enabled only when the form is valid
// =============================================================================

#[derive(Default)]
pub struct SignUpDialog {
    pub username: TextBox,
    pub password: TextBox,
    pub agree_to_terms: CheckBox,
    pub sign_up_button: PushButton,
}

impl SignUpDialog {
    pub fn set_username(&mut self, content: &str) {
        self.username.content = content.to_string();
        self.control_changed();
    }

    pub fn set_password(&mut self, content: &str) {
        self.password.content = content.to_string();
        self.control_changed();
    }

    pub fn set_agree_to_terms(&mut self, checked: bool) {
        self.agree_to_terms.checked = checked;
        self.control_changed();
    }

    fn control_changed(&mut self) {
        self.sign_up_button.enabled = self.is_form_valid();
    }

    fn is_form_valid(&self) -> bool {
        !self.username.is_empty()
            && !self.password.is_empty()
            && self.agree_to_terms.is_checked()
    }
}

// =============================================================================
// Demo
// =============================================================================

pub fn demo() {
    crate::banner("Mediator");

    let mut articles = ArticlesDialog::default();
    articles.select_article("Article 1");
    articles.edit_title("Article 2");
    println!("title box: {}", articles.title_box.content());
    println!("save button enabled: {}", articles.save_button.is_enabled());

    let mut sign_up = SignUpDialog::default();
    println!("\ninitially: {}", sign_up.sign_up_button.is_enabled());
    sign_up.set_username("username");
    println!("after username: {}", sign_up.sign_up_button.is_enabled());
    sign_up.set_password("password");
    println!("after password: {}", sign_up.sign_up_button.is_enabled());
    sign_up.set_agree_to_terms(true);
    println!("after agreeing to terms: {}", sign_up.sign_up_button.is_enabled());
    sign_up.set_password("");
    println!("after clearing password: {}", sign_up.sign_up_button.is_enabled());
    sign_up.set_password("password");
    println!("after re-typing password: {}", sign_up.sign_up_button.is_enabled());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selecting_an_article_fills_the_title_and_enables_save() {
        let mut dialog = ArticlesDialog::default();
        assert!(!dialog.save_button.is_enabled());
        dialog.select_article("Article 1");
        assert_eq!(dialog.title_box.content(), "Article 1");
        assert!(dialog.save_button.is_enabled());
    }

    #[test]
    fn clearing_the_title_disables_save() {
        let mut dialog = ArticlesDialog::default();
        dialog.select_article("Article 1");
        dialog.edit_title("");
        assert!(!dialog.save_button.is_enabled());
    }

    #[test]
    fn sign_up_button_follows_the_form_toggle_sequence() {
        let mut dialog = SignUpDialog::default();
        let mut states = vec![dialog.sign_up_button.is_enabled()];

        dialog.set_username("username");
        states.push(dialog.sign_up_button.is_enabled());
        dialog.set_password("password");
        states.push(dialog.sign_up_button.is_enabled());
        dialog.set_agree_to_terms(true);
        states.push(dialog.sign_up_button.is_enabled());
        dialog.set_password("");
        states.push(dialog.sign_up_button.is_enabled());
        dialog.set_password("password");
        states.push(dialog.sign_up_button.is_enabled());

        assert_eq!(states, [false, false, false, true, false, true]);
    }
}
