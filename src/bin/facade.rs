// Facade pattern: one "watch movie" call orchestrates the projector,
// sound system, and DVD player so the caller never touches them directly.

pub struct DvdPlayer;

impl DvdPlayer {
    pub fn on(&self) -> String {
        "DVD Player is ON.".to_string()
    }

    pub fn play(&self, movie: &str) -> String {
        format!("Playing movie: {movie}")
    }

    pub fn off(&self) -> String {
        "DVD Player is OFF.".to_string()
    }
}

pub struct SoundSystem;

impl SoundSystem {
    pub fn on(&self) -> String {
        "Sound System is ON.".to_string()
    }

    pub fn set_volume(&self, level: u32) -> String {
        format!("Setting volume to {level}.")
    }

    pub fn off(&self) -> String {
        "Sound System is OFF.".to_string()
    }
}

pub struct Projector;

impl Projector {
    pub fn on(&self) -> String {
        "Projector is ON.".to_string()
    }

    pub fn set_input(&self, source: &str) -> String {
        format!("Setting projector input to {source}.")
    }

    pub fn off(&self) -> String {
        "Projector is OFF.".to_string()
    }
}

/// Owns the subsystems and exposes the two high-level operations a
/// viewer actually wants.
pub struct HomeTheaterFacade {
    dvd_player: DvdPlayer,
    sound_system: SoundSystem,
    projector: Projector,
}

impl HomeTheaterFacade {
    pub fn new(dvd_player: DvdPlayer, sound_system: SoundSystem, projector: Projector) -> Self {
        Self {
            dvd_player,
            sound_system,
            projector,
        }
    }

    pub fn watch_movie(&self, movie: &str) -> Vec<String> {
        vec![
            format!("Preparing to watch movie: {movie}"),
            self.projector.on(),
            self.projector.set_input("DVD"),
            self.sound_system.on(),
            self.sound_system.set_volume(20),
            self.dvd_player.on(),
            self.dvd_player.play(movie),
            "Enjoy your movie!".to_string(),
        ]
    }

    pub fn end_movie(&self) -> Vec<String> {
        vec![
            "Shutting down the home theater.".to_string(),
            self.dvd_player.off(),
            self.sound_system.off(),
            self.projector.off(),
        ]
    }
}

fn main() {
    let home_theater = HomeTheaterFacade::new(DvdPlayer, SoundSystem, Projector);

    for line in home_theater.watch_movie("Inception") {
        println!("{line}");
    }
    for line in home_theater.end_movie() {
        println!("{line}");
    }
}
