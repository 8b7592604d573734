//! Key handling in the terminal front end

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

use showreel::config::Config;
use showreel::controller::{konami_code, AppController};
use showreel::{ClockAudio, PlayerSettings, PlaylistPlayer, SilentAudio};

async fn controller() -> AppController {
    let config = Config::default();
    let player = PlaylistPlayer::mount(config.tracks(), Box::new(SilentAudio), PlayerSettings::default())
        .await
        .unwrap();
    AppController::new(player, config.testimonials.clone(), config.autoplay_interval()).unwrap()
}

async fn press(controller: &AppController, code: KeyCode) {
    controller
        .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
        .await;
}

#[tokio::test(start_paused = true)]
async fn rejected_playback_shows_a_notice() {
    let controller = controller().await;

    press(&controller, KeyCode::Char(' ')).await;

    let state = controller.view_state().await;
    assert!(!state.player.playback.is_playing);
    assert!(state.ui.notice.as_deref().is_some_and(|n| n.contains("blocked")));
}

#[tokio::test(start_paused = true)]
async fn failed_continuation_shows_a_notice() {
    let config = Config::default();
    let tracks = config.tracks();
    // Only the first track can be played, and it lasts one second
    let catalog = [(tracks[0].audio_ref.clone(), 1.0)].into_iter().collect();
    let player = PlaylistPlayer::mount(tracks, Box::new(ClockAudio::new(catalog)), PlayerSettings::default())
        .await
        .unwrap();
    let controller =
        AppController::new(player, config.testimonials.clone(), config.autoplay_interval()).unwrap();

    press(&controller, KeyCode::Char(' ')).await;
    assert!(controller.view_state().await.ui.notice.is_none());

    tokio::time::sleep(Duration::from_millis(1100)).await;
    let state = controller.view_state().await;
    assert_eq!(state.player.playback.current_index, 1);
    assert!(!state.player.playback.is_playing);
    assert!(state.ui.notice.as_deref().is_some_and(|n| n.contains("blocked")));
}

#[tokio::test(start_paused = true)]
async fn digits_pick_a_dot_or_a_track() {
    let controller = controller().await;

    press(&controller, KeyCode::Char('3')).await;
    assert_eq!(controller.view_state().await.carousel.active_index, 2);

    press(&controller, KeyCode::Char('e')).await;
    press(&controller, KeyCode::Char('2')).await;
    let state = controller.view_state().await;
    assert!(state.ui.playlist_expanded);
    assert_eq!(state.player.playback.current_index, 1);
    assert_eq!(state.carousel.active_index, 2);

    press(&controller, KeyCode::Char('9')).await;
    let state = controller.view_state().await;
    assert_eq!(state.player.playback.current_index, 1);
    assert!(state.ui.notice.is_some());
}

#[tokio::test(start_paused = true)]
async fn volume_keys_step_and_clamp() {
    let controller = controller().await;

    for _ in 0..10 {
        press(&controller, KeyCode::Char('+')).await;
    }
    assert_eq!(controller.view_state().await.player.playback.volume_percent, 100);

    press(&controller, KeyCode::Char('-')).await;
    press(&controller, KeyCode::Char('m')).await;
    let state = controller.view_state().await;
    assert_eq!(state.player.playback.volume_percent, 95);
    assert_eq!(state.player.effective_volume(), 0);
}

#[tokio::test(start_paused = true)]
async fn category_tab_rebuilds_the_carousel() {
    let controller = controller().await;

    press(&controller, KeyCode::Tab).await;
    let state = controller.view_state().await;
    assert_eq!(state.ui.category.as_deref(), Some("web"));
    assert_eq!(state.carousel.active_index, 0);
    assert!(
        state
            .testimonial
            .as_ref()
            .is_some_and(|t| t.category.as_deref() == Some("web"))
    );
}

#[tokio::test(start_paused = true)]
async fn hold_key_freezes_rotation() {
    let controller = controller().await;

    press(&controller, KeyCode::Char('h')).await;
    tokio::time::sleep(Duration::from_secs(12)).await;
    let state = controller.view_state().await;
    assert!(state.carousel.is_paused);
    assert_eq!(state.carousel.active_index, 0);

    press(&controller, KeyCode::Char('h')).await;
    assert!(!controller.view_state().await.carousel.is_paused);
}

#[tokio::test(start_paused = true)]
async fn konami_code_unlocks_the_secret() {
    let controller = controller().await;

    for code in konami_code() {
        press(&controller, code).await;
    }

    let state = controller.view_state().await;
    assert!(state.ui.secret_unlocked);
    assert!(state.ui.notice.as_deref().is_some_and(|n| n.contains("Konami")));
}

#[tokio::test(start_paused = true)]
async fn quit_keys_and_shutdown() {
    let controller = controller().await;
    assert!(!controller.should_quit().await);

    controller
        .handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
        .await;
    assert!(controller.should_quit().await);

    controller.shutdown().await;
    tokio::time::sleep(Duration::from_secs(12)).await;
    assert_eq!(controller.view_state().await.carousel.active_index, 0);
}
