// Adapter pattern: an audio player that only speaks mp3 plays vlc and
// mp4 files through an adapter over the advanced player's interface.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MediaError {
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

pub trait MediaPlayer {
    fn play(&self, audio_type: &str, file_name: &str) -> Result<String, MediaError>;
}

/// The adaptee: a player with its own per-format interface.
pub struct AdvancedMediaPlayer;

impl AdvancedMediaPlayer {
    pub fn play_vlc(&self, file_name: &str) -> String {
        format!("Playing VLC file: {file_name}")
    }

    pub fn play_mp4(&self, file_name: &str) -> String {
        format!("Playing MP4 file: {file_name}")
    }
}

/// Translates the generic `play` call into the adaptee's interface.
pub struct MediaAdapter {
    advanced_player: AdvancedMediaPlayer,
}

impl MediaAdapter {
    pub fn new() -> Self {
        Self {
            advanced_player: AdvancedMediaPlayer,
        }
    }
}

impl MediaPlayer for MediaAdapter {
    fn play(&self, audio_type: &str, file_name: &str) -> Result<String, MediaError> {
        match audio_type {
            "vlc" => Ok(self.advanced_player.play_vlc(file_name)),
            "mp4" => Ok(self.advanced_player.play_mp4(file_name)),
            other => Err(MediaError::UnsupportedFormat(other.to_string())),
        }
    }
}

pub struct AudioPlayer;

impl MediaPlayer for AudioPlayer {
    fn play(&self, audio_type: &str, file_name: &str) -> Result<String, MediaError> {
        match audio_type {
            "mp3" => Ok(format!("Playing MP3 file: {file_name}")),
            "vlc" | "mp4" => MediaAdapter::new().play(audio_type, file_name),
            other => Err(MediaError::UnsupportedFormat(other.to_string())),
        }
    }
}

fn main() {
    let player = AudioPlayer;

    for (audio_type, file_name) in [
        ("mp3", "song.mp3"),
        ("mp4", "movie.mp4"),
        ("vlc", "video.vlc"),
        ("avi", "clip.avi"),
    ] {
        match player.play(audio_type, file_name) {
            Ok(line) => println!("{line}"),
            Err(err) => println!("{err}"),
        }
    }
}
