//! Rotation carousel timing on a paused tokio clock

use std::time::Duration;
use tokio::time::sleep;

use showreel::model::Direction;
use showreel::RotationCarousel;

const INTERVAL: Duration = Duration::from_secs(5);

fn quotes(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("quote {}", i)).collect()
}

fn mount(count: usize) -> RotationCarousel<String> {
    RotationCarousel::mount(quotes(count), INTERVAL).unwrap()
}

#[tokio::test(start_paused = true)]
async fn rotates_forward_every_interval() {
    let carousel = mount(3);
    assert_eq!(carousel.snapshot().active_index, 0);

    sleep(Duration::from_millis(4900)).await;
    assert_eq!(carousel.snapshot().active_index, 0);

    sleep(Duration::from_millis(200)).await;
    assert_eq!(carousel.snapshot().active_index, 1);
    assert_eq!(carousel.snapshot().direction, Direction::Forward);

    sleep(INTERVAL * 2).await;
    assert_eq!(carousel.snapshot().active_index, 0);
    assert_eq!(carousel.current().await.as_deref(), Some("quote 0"));
}

#[tokio::test(start_paused = true)]
async fn go_to_defers_the_next_tick() {
    let carousel = mount(5);

    sleep(Duration::from_secs(4)).await;
    carousel.go_to(3).await.unwrap();
    assert_eq!(carousel.snapshot().direction, Direction::Forward);

    // The tick that was due at 5s never happens
    sleep(Duration::from_secs(4)).await;
    assert_eq!(carousel.snapshot().active_index, 3);

    sleep(Duration::from_millis(1500)).await;
    assert_eq!(carousel.snapshot().active_index, 4);
}

#[tokio::test(start_paused = true)]
async fn go_to_an_earlier_dot_points_backward() {
    let carousel = mount(5);
    carousel.go_to(4).await.unwrap();
    carousel.go_to(1).await.unwrap();

    let state = carousel.snapshot();
    assert_eq!(state.active_index, 1);
    assert_eq!(state.direction, Direction::Backward);
}

#[tokio::test(start_paused = true)]
async fn paused_carousel_stays_put() {
    let carousel = mount(5);
    carousel.go_to(2).await.unwrap();
    carousel.pause().await;
    assert!(carousel.snapshot().is_paused);
    assert!(!carousel.is_autoplaying().await);

    sleep(Duration::from_secs(10)).await;
    assert_eq!(carousel.snapshot().active_index, 2);
}

#[tokio::test(start_paused = true)]
async fn resume_waits_a_full_interval() {
    let carousel = mount(5);

    sleep(Duration::from_secs(2)).await;
    carousel.pause().await;
    sleep(Duration::from_secs(10)).await;
    carousel.resume().await;
    assert!(carousel.is_autoplaying().await);

    sleep(Duration::from_millis(4900)).await;
    assert_eq!(carousel.snapshot().active_index, 0);

    sleep(Duration::from_millis(200)).await;
    assert_eq!(carousel.snapshot().active_index, 1);
}

#[tokio::test(start_paused = true)]
async fn manual_arrows_reset_the_timer() {
    let carousel = mount(5);

    sleep(Duration::from_secs(4)).await;
    carousel.next().await;
    assert_eq!(carousel.snapshot().active_index, 1);

    sleep(Duration::from_secs(4)).await;
    assert_eq!(carousel.snapshot().active_index, 1);

    sleep(Duration::from_millis(1500)).await;
    assert_eq!(carousel.snapshot().active_index, 2);

    carousel.previous().await;
    carousel.previous().await;
    carousel.previous().await;
    let state = carousel.snapshot();
    assert_eq!(state.active_index, 4);
    assert_eq!(state.direction, Direction::Backward);
}

#[tokio::test(start_paused = true)]
async fn advance_full_cycle_returns_to_start() {
    let carousel = mount(5);
    carousel.pause().await;

    for _ in 0..5 {
        carousel.advance(1).await;
    }
    assert_eq!(carousel.snapshot().active_index, 0);

    carousel.advance(-7).await;
    assert_eq!(carousel.snapshot().active_index, 3);
}

#[tokio::test(start_paused = true)]
async fn unmount_stops_rotation() {
    let carousel = mount(5);
    carousel.unmount().await;
    assert!(!carousel.is_autoplaying().await);

    sleep(INTERVAL * 3).await;
    assert_eq!(carousel.snapshot().active_index, 0);
}

