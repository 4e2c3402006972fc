use std::{io, path::Path};

use chrono::NaiveTime;
use pktlog::{
    capture, config, dump::build_dump_at, sink::LogSink, Direction, Packet, PacketKind,
    PacketLogger,
};

fn demo(file: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("demos").join(file)
}

#[test]
fn demo_capture_dumps() {
    let packets = capture::load(&demo("capture.toml")).unwrap();
    let config = config::load(&demo("pktlog.toml")).unwrap().logger;
    let time = NaiveTime::from_hms_milli_opt(8, 5, 9, 7).unwrap();

    assert_eq!(packets.len(), 3);
    assert_eq!(packets[2].kind(), PacketKind::Unknown { length: 10, version: 1 });

    let dumps: Vec<String> = packets
        .iter()
        .map(|p| build_dump_at(p, p.direction, &config, time))
        .collect();

    assert_eq!(
        dumps[0],
        "[~08:05:09.007] [CLIENT < SERVER] Login Ok 0x14\n\
         {\n\
         \x20   user_id: 42\n\
         \x20   user_token: \"abc\"\n\
         \x20   session_key: \n\
         \x20   [\n\
         \x20       0A 0B 0C 0D \n\
         \x20   ]\n\
         \x20   region: null\n\
         \x20   server_build: 7\n\
         }\n"
    );
    assert_eq!(
        dumps[1],
        "[~08:05:09.007] [CLIENT > SERVER] Keep Alive 0x1E { }\n"
    );
    assert!(dumps[2].starts_with(
        "[~08:05:09.007] [CLIENT > SERVER] Unknown 0xFF Length 10 Version 1\n{\n    payload: \n"
    ));
}

#[test]
fn replay_through_logger() {
    let dir = tempfile::tempdir().unwrap();
    let packets = capture::load(&demo("capture.toml")).unwrap();
    let config = pktlog::LoggerConfig::default()
        .with_console(false)
        .with_target(config::LogTarget::File(dir.path().join("replay.log")));
    let sink = LogSink::with_console(&config.target, Box::new(io::sink())).unwrap();
    let logger = PacketLogger::with_sink(config, sink);

    for packet in &packets {
        logger.log_packet(packet, packet.direction).unwrap();
    }

    let log = std::fs::read_to_string(logger.sink().path()).unwrap();
    assert_eq!(log.matches("[CLIENT < SERVER]").count(), 1);
    assert_eq!(log.matches("[CLIENT > SERVER]").count(), 2);
    assert!(!log.contains("server_build"));
    assert!(packets.iter().all(|p| p.direction != Direction::ToClient || p.id() == 0x14));
}
