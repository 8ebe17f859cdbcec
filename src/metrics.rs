//! 사용 이벤트 기록. 계산 모듈은 이 모듈을 알지 못하며, UI 계층이 싱크를 주입받아 사용한다.

use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

/// 단일 사용 이벤트. JSON 형태는 `{"name": .., <data 필드>.., "t": <ms>}` 이다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricEvent {
    pub name: String,
    #[serde(flatten)]
    pub data: BTreeMap<String, String>,
    /// UNIX epoch 기준 밀리초
    pub t: u64,
}

impl MetricEvent {
    /// 현재 시각으로 이벤트를 만든다.
    pub fn now(name: &str) -> Self {
        let t = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        Self {
            name: name.to_string(),
            data: BTreeMap::new(),
            t,
        }
    }

    pub fn with(mut self, key: &str, value: impl ToString) -> Self {
        self.data.insert(key.to_string(), value.to_string());
        self
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{{\"name\":\"{}\"}}", self.name))
    }
}

/// 이벤트 수신자.
pub trait MetricsSink: Send + Sync {
    fn record(&self, event: MetricEvent);
}

/// 이벤트를 버린다.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl MetricsSink for NoopSink {
    fn record(&self, _event: MetricEvent) {}
}

/// 이벤트를 `tracing` 로그로 남긴다.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl MetricsSink for TracingSink {
    fn record(&self, event: MetricEvent) {
        tracing::info!(target: "fryflip::metrics", metric = %event.name, payload = %event.to_json());
    }
}

/// 이벤트를 메모리에 모은다.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<MetricEvent>>,
}

impl MemorySink {
    pub fn events(&self) -> Vec<MetricEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    pub fn names(&self) -> Vec<String> {
        self.events().into_iter().map(|e| e.name).collect()
    }
}

impl MetricsSink for MemorySink {
    fn record(&self, event: MetricEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_flattens_data_next_to_name() {
        let mut ev = MetricEvent::now("preset").with("label", "Wings");
        ev.t = 42;
        assert_eq!(ev.to_json(), r#"{"name":"preset","label":"Wings","t":42}"#);
    }

    #[test]
    fn memory_sink_keeps_order() {
        let sink = MemorySink::default();
        sink.record(MetricEvent::now("convert"));
        sink.record(MetricEvent::now("timer_start"));
        assert_eq!(sink.names(), vec!["convert", "timer_start"]);
    }
}
