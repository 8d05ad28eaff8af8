mod most_played;
mod song;

pub use most_played::{MostPlayedList, MOST_PLAYED_CAPACITY};
pub use song::Song;
