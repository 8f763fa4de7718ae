//! Everything the skill says out loud.

use rand::Rng;

const PLAYER_PLACEHOLDER: &str = "{player}";

/// Shaming lines, one is picked at random per addition.
pub const BASHING_QUOTES: [&str; 3] = [
    "I'm not surprised. {player} is a terrible player",
    "I've seen {player} play once. It injured my eyes permanently. That's why I'm blind. Sad story",
    "{player} deserves to be there.",
];

/// Who gets blamed when nobody is on the wall yet.
pub const DEFAULT_WORST_PLAYER: &str = "Venelin";

pub const WELCOME_SPEECH: &str = "Welcome to the wall of shame Helper. You can ask a question like, \
     who's the worst player? Or add a player on the wall ... Now, what can I help you with?";
pub const WELCOME_REPROMPT: &str = "For instructions on what you can say, please say help me.";

pub const HELP_SPEECH: &str = "You can ask questions about the wall of shame such as, who's \
     the worst player, or, you can say exit... Now, how can I help you?";
pub const HELP_REPROMPT: &str =
    "You can say things like, what's the worst player, or you can say exit... Now, how can I help you?";

pub const UNSUPPORTED: &str = "This is unsupported.  Please try something else.";
pub const GOODBYE: &str = "Goodbye";
pub const WALL_CLEANED: &str = "The wall have been cleaned.";

pub const WORST_PLAYER_TITLE: &str = "Who is the worst player?";
pub const CLEAN_WALL_TITLE: &str = "Clean wall";

/// Pick one of [`BASHING_QUOTES`] uniformly and fill in the player.
pub fn random_bashing<R: Rng + ?Sized>(rng: &mut R, player: &str) -> String {
    let template = BASHING_QUOTES[rng.random_range(0..BASHING_QUOTES.len())];
    fill(template, player)
}

/// Substitute every `{player}` placeholder in `template`.
pub fn fill(template: &str, player: &str) -> String {
    template.replace(PLAYER_PLACEHOLDER, player)
}

pub fn second_chance(player: &str) -> String {
    format!(
        "Everybody deserves to have a second chance. {}, try to stay out of the wall or just stop playing",
        player
    )
}

pub fn worst_player(player: &str) -> String {
    format!(
        "In the race of mediocrity, {} is ahead and it's well deserved",
        player
    )
}

pub fn no_worst_player() -> String {
    format!(
        "I don't have any data to prove it but my guess goes to {}",
        DEFAULT_WORST_PLAYER
    )
}

pub fn added_title(player: &str) -> String {
    format!("{} added to the wall of shame", player)
}

pub fn removed_title(player: &str) -> String {
    format!("{} removed from the wall of shame", player)
}
