//! MQTT listener feeding the status tracker.
//!
//! Runs for process lifetime with no cancellation surface. Transport errors
//! never reach request handlers; the worst visible effect is a stale or
//! disconnected status reading.

use chrono::Utc;
use rumqttc::{AsyncClient, Event, MqttOptions, Packet, QoS};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::config::Config;
use crate::status::StatusTracker;

/// Backlog of undelivered payloads before the stream applies backpressure.
const CHANNEL_CAPACITY: usize = 64;

/// Reconnect backoff bounds.
const BACKOFF_INITIAL: Duration = Duration::from_secs(1);
const BACKOFF_MAX: Duration = Duration::from_secs(60);

/// Subscribe to the device status topic and keep the tracker current.
///
/// Payloads are handed from the network event loop to a single consumer task
/// over a channel, so snapshot mutation is decoupled from transport I/O. On
/// transport errors the loop sleeps with exponential backoff and keeps
/// polling; the backoff resets on every successful (re)connect.
pub async fn run_status_listener(config: Arc<Config>, tracker: StatusTracker) {
    let (tx, mut rx) = mpsc::channel::<Vec<u8>>(CHANNEL_CAPACITY);

    // Single consumer: the only writer of the snapshot.
    let consumer = tracker.clone();
    tokio::spawn(async move {
        while let Some(payload) = rx.recv().await {
            consumer.apply_payload(&payload, Utc::now());
        }
    });

    let mut options = MqttOptions::new(
        &config.mqtt_client_id,
        &config.mqtt_host,
        config.mqtt_port,
    );
    options.set_keep_alive(Duration::from_secs(config.mqtt_keep_alive_seconds));

    let (client, mut eventloop) = AsyncClient::new(options, 16);

    tracing::info!(
        host = %config.mqtt_host,
        port = config.mqtt_port,
        topic = %config.mqtt_status_topic,
        "Starting device status listener"
    );

    let mut backoff = BACKOFF_INITIAL;

    loop {
        match eventloop.poll().await {
            Ok(Event::Incoming(Packet::ConnAck(_))) => {
                tracing::info!("MQTT connected");
                backoff = BACKOFF_INITIAL;

                // Subscribe on every (re)connect; the broker may have dropped
                // our session between connections.
                if let Err(e) = client
                    .subscribe(&config.mqtt_status_topic, QoS::AtLeastOnce)
                    .await
                {
                    tracing::error!(
                        topic = %config.mqtt_status_topic,
                        error = %e,
                        "Status topic subscribe failed"
                    );
                }
            }

            Ok(Event::Incoming(Packet::Publish(publish))) => {
                if publish.topic == config.mqtt_status_topic {
                    if tx.send(publish.payload.to_vec()).await.is_err() {
                        tracing::error!("Status consumer task gone, stopping listener");
                        return;
                    }
                } else {
                    tracing::debug!(topic = %publish.topic, "Ignoring message on unexpected topic");
                }
            }

            Ok(Event::Incoming(Packet::Disconnect)) => {
                tracing::warn!("MQTT disconnected by broker");
            }

            Ok(_) => {}

            Err(e) => {
                tracing::warn!(
                    error = %e,
                    retry_in_secs = backoff.as_secs(),
                    "MQTT stream error, reconnecting"
                );
                tokio::time::sleep(backoff).await;
                backoff = (backoff * 2).min(BACKOFF_MAX);
            }
        }
    }
}
