//! Status views: rendered text and the calls made to build it.

#![cfg_attr(test, allow(clippy::unwrap_used))]

mod common;

use std::sync::Arc;

use common::{FakeBus, call, metadata, run, startup_call, status};
use mpris_remote::services::{
    bus::{BusClient, BusValue},
    mpris::{PlayerHandle, Remote, compact_status, verbose_status},
};

fn loaded_player() -> Arc<FakeBus> {
    let bus = FakeBus::with_player("foo");
    bus.reply("GetLength", BusValue::Int(4));
    bus.reply("GetCurrentTrack", BusValue::Int(2));
    bus.reply("GetStatus", status([0, 1, 0, 1]));
    bus.reply("PositionGet", BusValue::Int(89_147));
    bus.reply(
        "GetMetadata",
        metadata(&[
            ("time", BusValue::Int(143)),
            ("tracknumber", BusValue::Str("3".to_string())),
            ("artist", BusValue::Str("An Artist".to_string())),
            ("title", BusValue::Str("Yeah Whatever".to_string())),
            ("album", BusValue::Str("This is the Album".to_string())),
        ]),
    );
    bus
}

async fn remote(bus: &Arc<FakeBus>) -> Remote {
    let client: Arc<dyn BusClient> = bus.clone();
    Remote::connect(client, PlayerHandle::from_bus_name("org.mpris.foo"))
        .await
        .unwrap()
}

#[tokio::test]
async fn verbose_status_renders_now_playing() {
    let bus = loaded_player();
    let remote = remote(&bus).await;

    let output = verbose_status(&remote).await.unwrap();

    assert_eq!(
        output,
        "[playing 3/4] @ 1:29/2:23 - #3\n\
         \x20 artist: An Artist\n\
         \x20 title: Yeah Whatever\n\
         \x20 album: This is the Album\n\
         [repeat off] [random on] [loop on]\n"
    );
}

#[tokio::test]
async fn session_remembers_its_player() {
    let bus = loaded_player();
    let remote = remote(&bus).await;

    assert_eq!(remote.player().bus_name(), "org.mpris.foo");
    assert_eq!(remote.player().short_name(), "foo");
    assert_eq!(bus.calls(), vec![startup_call()]);
}

#[tokio::test]
async fn verbose_status_calls_in_fixed_order() {
    let bus = loaded_player();
    let remote = remote(&bus).await;

    verbose_status(&remote).await.unwrap();

    assert_eq!(
        bus.calls(),
        vec![
            startup_call(),
            call("/TrackList", "GetLength"),
            call("/TrackList", "GetCurrentTrack"),
            call("/Player", "GetStatus"),
            call("/Player", "PositionGet"),
            call("/Player", "GetMetadata"),
        ]
    );
}

#[tokio::test]
async fn verbose_status_is_empty_without_tracks() {
    let bus = FakeBus::with_player("foo");
    let remote = remote(&bus).await;

    let output = verbose_status(&remote).await.unwrap();

    assert_eq!(output, "");
    assert_eq!(bus.calls(), vec![startup_call(), call("/TrackList", "GetLength")]);
}

#[tokio::test]
async fn compact_status_lists_flags() {
    let bus = loaded_player();
    let remote = remote(&bus).await;

    let output = compact_status(&remote).await.unwrap();

    assert_eq!(
        output,
        "playing: playing\nrandom/shuffle: true\nrepeat track: false\nrepeat list: true\n"
    );
    assert_eq!(bus.calls(), vec![startup_call(), call("/Player", "GetStatus")]);
}

#[tokio::test]
async fn compact_status_labels_paused_player() {
    let bus = FakeBus::with_player("foo");
    bus.reply("GetStatus", status([1, 0, 0, 0]));
    let remote = remote(&bus).await;

    let output = compact_status(&remote).await.unwrap();

    assert!(output.starts_with("playing: not playing\n"));
}

#[tokio::test]
async fn unknown_play_state_renders_as_not_playing() {
    let bus = loaded_player();
    bus.reply("GetStatus", status([3, 0, 0, 0]));
    let remote = remote(&bus).await;

    let compact = compact_status(&remote).await.unwrap();
    let verbose = verbose_status(&remote).await.unwrap();

    assert_eq!(
        compact,
        "playing: not playing\nrandom/shuffle: false\nrepeat track: false\nrepeat list: false\n"
    );
    assert!(verbose.starts_with("[not playing 3/4] @ 1:29/2:23 - #3\n"));
}

#[tokio::test]
async fn status_command_is_the_default() {
    let bus = loaded_player();
    let client: Arc<dyn BusClient> = bus.clone();

    let output = mpris_remote::cli::CliService::new(client)
        .execute_command(Some("foo"), None, &[])
        .await
        .unwrap();

    assert!(output.starts_with("[playing 3/4] @ 1:29/2:23 - #3\n"));
}

#[tokio::test]
async fn trackinfo_lists_every_key() {
    let bus = loaded_player();

    let output = run(&bus, "trackinfo", &[]).await.unwrap();

    assert_eq!(
        output,
        "album: This is the Album\n\
         artist: An Artist\n\
         time: 143\n\
         title: Yeah Whatever\n\
         tracknumber: 3\n"
    );
}

#[tokio::test]
async fn position_prints_minutes() {
    let bus = loaded_player();

    assert_eq!(run(&bus, "position", &[]).await.unwrap(), "1:29");
}

#[tokio::test]
async fn malformed_status_reply_is_reported() {
    let bus = FakeBus::with_player("foo");
    bus.reply("GetStatus", BusValue::Str("Playing".to_string()));

    let result = run(&bus, "playstatus", &[]).await;

    assert!(result.is_err());
}
