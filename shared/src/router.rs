//! Intent dispatch: turns a resolved intent into a store change and a reply.

use rand::Rng;
use tracing::info;

use crate::intent::{slot_value, Intent, Slots, PLAYER_SLOT};
use crate::quotes;
use crate::response::Response;
use crate::store::LeaderboardStore;

type Handler = fn(&mut LeaderboardStore, &mut dyn rand::RngCore, &Slots) -> Response;

/// Handle an intent by name.
///
/// Never fails: a missing player slot answers with help, an unknown intent
/// with the "unsupported" prompt.
pub fn dispatch<R: Rng>(
    store: &mut LeaderboardStore,
    rng: &mut R,
    intent_name: &str,
    slots: &Slots,
) -> Response {
    let intent = Intent::from_name(intent_name);
    info!(intent_name, ?intent, "Dispatching intent");
    handler_for(intent)(store, rng, slots)
}

fn handler_for(intent: Intent) -> Handler {
    match intent {
        Intent::Addition => add_player,
        Intent::Removal => remove_player,
        Intent::Clean => clean_wall,
        Intent::Worst => worst_player,
        Intent::Help => |_, _, _| help(),
        Intent::Stop | Intent::Cancel => |_, _, _| Response::tell(quotes::GOODBYE),
        Intent::Unrecognized => |_, _, _| unsupported(),
    }
}

/// Greeting for a launch without an intent.
pub fn launch() -> Response {
    Response::ask(quotes::WELCOME_SPEECH, quotes::WELCOME_REPROMPT)
}

pub fn help() -> Response {
    Response::ask(quotes::HELP_SPEECH, quotes::HELP_REPROMPT)
}

pub fn unsupported() -> Response {
    Response::ask(quotes::UNSUPPORTED, quotes::UNSUPPORTED)
}

fn add_player(store: &mut LeaderboardStore, rng: &mut dyn rand::RngCore, slots: &Slots) -> Response {
    let Some(player) = slot_value(slots, PLAYER_SLOT) else {
        return help();
    };

    let message = quotes::random_bashing(rng, player);
    let count = store.add(player);
    info!(player, count, "Player shamed");

    Response::tell_with_card(message, quotes::added_title(player))
}

fn remove_player(store: &mut LeaderboardStore, _: &mut dyn rand::RngCore, slots: &Slots) -> Response {
    let Some(player) = slot_value(slots, PLAYER_SLOT) else {
        return help();
    };

    Response::tell_with_card(store.remove(player), quotes::removed_title(player))
}

fn worst_player(store: &mut LeaderboardStore, _: &mut dyn rand::RngCore, _: &Slots) -> Response {
    let message = match store.worst() {
        Some((player, _)) => quotes::worst_player(&player),
        None => quotes::no_worst_player(),
    };

    Response::tell_with_card(message, quotes::WORST_PLAYER_TITLE)
}

fn clean_wall(store: &mut LeaderboardStore, _: &mut dyn rand::RngCore, _: &Slots) -> Response {
    store.clear();
    Response::tell_with_card(quotes::WALL_CLEANED, quotes::CLEAN_WALL_TITLE)
}
