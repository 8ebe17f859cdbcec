//! 조리 타이머. 시계는 갖지 않으며 호출 측이 1초마다 `tick`을 호출한다.

use crate::conversion::{parse_time, round_half_up};

/// 타이머 길이 산정 시 오븐 시간에 곱하는 배율.
pub const TIMER_FACTOR: f64 = 0.9;

/// `tick` 한 번의 결과.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// 동작 중이 아님
    Idle,
    Running { remaining: u32 },
    /// 절반 지점 도달 (한 번만 발생)
    Halfway { remaining: u32 },
    Finished,
}

/// 오븐 시간 문자열로 타이머 길이 [s]를 계산한다. 최소 1초.
pub fn timer_seconds_for(oven_time: &str) -> u32 {
    round_half_up(parse_time(oven_time) * 60.0 * TIMER_FACTOR).max(1.0) as u32
}

/// 카운트다운 상태.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookTimer {
    remaining: Option<u32>,
    start: u32,
    half_announced: bool,
}

impl CookTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 주어진 초로 (재)시작한다. 0은 1초로 올린다.
    pub fn start(&mut self, total_secs: u32) {
        let total = total_secs.max(1);
        self.remaining = Some(total);
        self.start = total;
        self.half_announced = false;
    }

    /// 오븐 시간 문자열 기준으로 시작한다.
    pub fn start_for(&mut self, oven_time: &str) -> u32 {
        let secs = timer_seconds_for(oven_time);
        self.start(secs);
        secs
    }

    pub fn stop(&mut self) {
        self.remaining = None;
        self.half_announced = false;
    }

    pub fn is_running(&self) -> bool {
        self.remaining.is_some()
    }

    pub fn remaining(&self) -> Option<u32> {
        self.remaining
    }

    pub fn halfway_announced(&self) -> bool {
        self.half_announced
    }

    /// 1초 경과를 반영한다.
    pub fn tick(&mut self) -> TimerEvent {
        let Some(secs) = self.remaining else {
            return TimerEvent::Idle;
        };
        let next = secs.saturating_sub(1);
        if next == 0 {
            self.remaining = None;
            return TimerEvent::Finished;
        }
        self.remaining = Some(next);
        if !self.half_announced && self.start > 0 && next <= self.start / 2 {
            self.half_announced = true;
            return TimerEvent::Halfway { remaining: next };
        }
        TimerEvent::Running { remaining: next }
    }

    /// `m:ss` 형식. 정지 상태면 `0:00`.
    pub fn display(&self) -> String {
        format_clock(self.remaining.unwrap_or(0))
    }
}

pub fn format_clock(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}
