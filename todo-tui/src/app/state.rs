use todo_client::Todo;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    Login,
    Register,
    Tasks,
    ConfirmDelete,
}

/// Client-local list filter. Not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Incomplete,
    Completed,
}

impl Filter {
    pub fn next(self) -> Self {
        match self {
            Filter::All => Filter::Incomplete,
            Filter::Incomplete => Filter::Completed,
            Filter::Completed => Filter::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Incomplete => "Incomplete",
            Filter::Completed => "Completed",
        }
    }

    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            Filter::All => true,
            Filter::Incomplete => !todo.completed,
            Filter::Completed => todo.completed,
        }
    }
}

/// Which half of the task view owns key input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusedPane {
    List,
    Form,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FormField {
    #[default]
    Title,
    Description,
    DueDate,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::DueDate,
            FormField::DueDate => FormField::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Title => FormField::DueDate,
            FormField::Description => FormField::Title,
            FormField::DueDate => FormField::Description,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AuthField {
    Username,
    Password,
}

/// What the delete confirmation dialog is about.
#[derive(Debug, Clone)]
pub struct DeleteContext {
    pub id: i32,
    pub title: String,
}

/// Credential inputs for the login and register views.
#[derive(Debug, Clone)]
pub struct AuthForm {
    pub username: TextInput,
    pub password: TextInput,
    pub focused_field: AuthField,
}

impl Default for AuthForm {
    fn default() -> Self {
        Self {
            username: TextInput::new(),
            password: TextInput::new(),
            focused_field: AuthField::Username,
        }
    }
}

impl AuthForm {
    pub fn switch_field(&mut self) {
        self.focused_field = match self.focused_field {
            AuthField::Username => AuthField::Password,
            AuthField::Password => AuthField::Username,
        };
    }

    pub fn active_input(&mut self) -> &mut TextInput {
        match self.focused_field {
            AuthField::Username => &mut self.username,
            AuthField::Password => &mut self.password,
        }
    }

    pub fn clear(&mut self) {
        self.username.clear();
        self.password.clear();
        self.focused_field = AuthField::Username;
    }

    pub fn is_filled(&self) -> bool {
        !self.username.value.trim().is_empty() && !self.password.value.is_empty()
    }
}

/// A text input with mid-string cursor support.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextInput {
    pub value: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_str(s: &str) -> Self {
        Self {
            value: s.to_string(),
            cursor: s.len(),
        }
    }

    /// Insert a character at the cursor position.
    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character immediately before the cursor (backspace).
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let new_cursor = self.prev_boundary(self.cursor);
        self.value.drain(new_cursor..self.cursor);
        self.cursor = new_cursor;
    }

    /// Move cursor one char left (`left == true`) or right.
    pub fn move_cursor(&mut self, left: bool) {
        if left {
            if self.cursor > 0 {
                self.cursor = self.prev_boundary(self.cursor);
            }
        } else if self.cursor < self.value.len() {
            self.cursor = self.next_boundary(self.cursor);
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Returns the string split at the cursor: (before, after).
    pub fn split_at_cursor(&self) -> (&str, &str) {
        (&self.value[..self.cursor], &self.value[self.cursor..])
    }

    fn prev_boundary(&self, pos: usize) -> usize {
        self.value[..pos]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self, pos: usize) -> usize {
        self.value[pos..]
            .chars()
            .next()
            .map(|c| pos + c.len_utf8())
            .unwrap_or(self.value.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_input_edits_at_cursor() {
        let mut input = TextInput::from_str("täst");
        input.move_cursor(true);
        input.backspace();
        assert_eq!(input.value, "tät");
        input.insert('s');
        assert_eq!(input.value, "täst");
        input.home();
        input.insert('x');
        assert_eq!(input.value, "xtäst");
    }

    #[test]
    fn filter_cycles_through_all_states() {
        let f = Filter::All;
        assert_eq!(f.next(), Filter::Incomplete);
        assert_eq!(f.next().next(), Filter::Completed);
        assert_eq!(f.next().next().next(), Filter::All);
    }
}
