//! Key event handling

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::AppController;

impl AppController {
    pub async fn handle_key_event(&self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.secret.lock().await.push(key.code) {
            tracing::info!("Konami code entered");
            let mut ui = self.ui_state.lock().await;
            ui.secret_unlocked = true;
            ui.set_notice("Konami code activated! You found a secret.");
        }

        let ui_state = self.ui_state.lock().await.clone();

        // Digits pick a track while the playlist is open, a dot otherwise
        if let KeyCode::Char(c @ '1'..='9') = key.code {
            let index = c as usize - '1' as usize;
            if ui_state.playlist_expanded {
                self.select_track(index).await;
            } else {
                self.carousel_go_to(index).await;
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.ui_state.lock().await.should_quit = true;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.ui_state.lock().await.should_quit = true;
            }
            // Play/Pause toggle
            KeyCode::Char(' ') => self.toggle_playback().await,
            KeyCode::Char('n') | KeyCode::Char('N') => self.next_track().await,
            KeyCode::Char('p') | KeyCode::Char('P') => self.previous_track().await,
            KeyCode::Char('.') => self.seek_by(1.0).await,
            KeyCode::Char(',') => self.seek_by(-1.0).await,
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => self.volume_up().await,
            KeyCode::Char('-') | KeyCode::Down => self.volume_down().await,
            KeyCode::Char('m') | KeyCode::Char('M') => self.toggle_mute().await,
            // Testimonial arrows
            KeyCode::Right => self.carousel_next().await,
            KeyCode::Left => self.carousel_previous().await,
            KeyCode::Char('h') | KeyCode::Char('H') => self.toggle_carousel_hold().await,
            KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Tab => self.cycle_category().await,
            KeyCode::Char('e') | KeyCode::Char('E') => self.toggle_playlist().await,
            KeyCode::Char('v') | KeyCode::Char('V') => self.toggle_player_visible().await,
            _ => {}
        }
    }
}
