use serde::Serialize;

wire_record! {
    /// Inline keyboard attached to a message.
    pub struct InlineKeyboardMarkup {
        pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
    }
}

impl InlineKeyboardMarkup {
    /// Append a row of buttons.
    pub fn add_line(&mut self, line: Vec<InlineKeyboardButton>) {
        self.inline_keyboard.get_or_insert_with(Vec::new).push(line);
    }

    /// Remove the row at `line_number` (0-based), if there is one.
    pub fn remove_line(&mut self, line_number: usize) -> Option<Vec<InlineKeyboardButton>> {
        let rows = self.inline_keyboard.as_mut()?;
        (line_number < rows.len()).then(|| rows.remove(line_number))
    }
}

wire_record! {
    /// Exactly one of the optional action fields should be set.
    pub struct InlineKeyboardButton {
        pub text: String,
        pub url: String,
        pub login_url: LoginUrl,
        pub callback_data: String,
        pub switch_inline_query: String,
        pub switch_inline_query_current_chat: String,
        pub callback_game: CallbackGame,
        pub pay: bool,
    }
}

wire_record! {
    pub struct LoginUrl {
        pub url: String,
        pub forward_text: String,
        pub bot_username: String,
        pub request_write_access: bool,
    }
}

wire_record! {
    /// Placeholder; holds no information.
    pub struct CallbackGame {}
}

wire_record! {
    /// Custom reply keyboard replacing the user's keyboard.
    pub struct ReplyKeyboardMarkup {
        pub keyboard: Vec<Vec<KeyboardButton>>,
        pub resize_keyboard: bool,
        pub one_time_keyboard: bool,
        pub input_field_placeholder: String,
        pub selective: bool,
    }
}

impl ReplyKeyboardMarkup {
    pub fn add_line(&mut self, line: Vec<KeyboardButton>) {
        self.keyboard.get_or_insert_with(Vec::new).push(line);
    }

    pub fn remove_line(&mut self, line_number: usize) -> Option<Vec<KeyboardButton>> {
        let rows = self.keyboard.as_mut()?;
        (line_number < rows.len()).then(|| rows.remove(line_number))
    }
}

wire_record! {
    pub struct KeyboardButton {
        pub text: String,
        pub request_contact: bool,
        pub request_location: bool,
        pub request_poll: KeyboardButtonPollType,
    }
}

wire_record! {
    pub struct KeyboardButtonPollType {
        /// "quiz", "regular", or absent for any poll.
        #[serde(rename = "type")]
        pub kind: String,
    }
}

wire_record! {
    pub struct ReplyKeyboardRemove {
        pub remove_keyboard: bool,
        pub selective: bool,
    }
}

wire_record! {
    /// Shows a reply interface to the user, as if they tapped "Reply".
    pub struct ForceReply {
        pub force_reply: bool,
        pub input_field_placeholder: String,
        pub selective: bool,
    }
}

/// Any value accepted by the `reply_markup` request parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReplyMarkup {
    Inline(InlineKeyboardMarkup),
    Keyboard(ReplyKeyboardMarkup),
    Remove(ReplyKeyboardRemove),
    ForceReply(ForceReply),
}

impl From<InlineKeyboardMarkup> for ReplyMarkup {
    fn from(markup: InlineKeyboardMarkup) -> Self {
        Self::Inline(markup)
    }
}

impl From<ReplyKeyboardMarkup> for ReplyMarkup {
    fn from(markup: ReplyKeyboardMarkup) -> Self {
        Self::Keyboard(markup)
    }
}

impl From<ReplyKeyboardRemove> for ReplyMarkup {
    fn from(markup: ReplyKeyboardRemove) -> Self {
        Self::Remove(markup)
    }
}

impl From<ForceReply> for ReplyMarkup {
    fn from(markup: ForceReply) -> Self {
        Self::ForceReply(markup)
    }
}
