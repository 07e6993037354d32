use super::{Animation, MessageEntity, PhotoSize, User};

wire_record! {
    pub struct Game {
        pub title: String,
        pub description: String,
        pub photo: Vec<PhotoSize>,
        /// Set by the bot with `setGameScore` or present in the game message.
        pub text: String,
        pub text_entities: Vec<MessageEntity>,
        pub animation: Animation,
    }
}

wire_record! {
    /// One row of a game's high score table.
    pub struct GameHighScore {
        pub position: i64,
        pub user: User,
        pub score: i64,
    }
}
