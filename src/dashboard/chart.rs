use std::collections::VecDeque;

use crate::models::ChartPoint;

pub const CHART_CAPACITY: usize = 10;

/// One representative point per poll, oldest first. Overflow drops from the
/// front, the opposite end from [`super::FeedWindow`].
#[derive(Debug, Clone)]
pub struct ChartWindow {
    points: VecDeque<ChartPoint>,
    capacity: usize,
}

impl Default for ChartWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartWindow {
    pub fn new() -> Self {
        Self::with_capacity(CHART_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn append_point(&mut self, point: ChartPoint) {
        self.points.push_back(point);
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last(&self) -> Option<&ChartPoint> {
        self.points.back()
    }

    pub fn to_vec(&self) -> Vec<ChartPoint> {
        self.points.iter().cloned().collect()
    }
}
