#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use tileview::{Rect, Size, Surface, TileInfo};

/// In-memory surface. `applied` is shared so callbacks can inspect it.
pub struct Stage {
    pub size: Size,
    pub tiles: Vec<TileInfo<u32>>,
    pub applied: Rc<RefCell<HashMap<u32, Rect>>>,
}

impl Stage {
    pub fn new(width: f64, height: f64, count: u32) -> Self {
        Self {
            size: Size::new(width, height),
            tiles: (0..count).map(TileInfo::new).collect(),
            applied: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    /// 400x300, the container every scenario uses.
    pub fn standard(count: u32) -> Self {
        Self::new(400.0, 300.0, count)
    }

    pub fn with_big(mut self, idx: usize) -> Self {
        self.tiles[idx].big = true;
        self
    }

    pub fn rect(&self, id: u32) -> Rect {
        self.applied.borrow()[&id]
    }
}

impl Surface for Stage {
    type Id = u32;

    fn size(&self) -> Size {
        self.size
    }

    fn tiles(&self) -> Vec<TileInfo<u32>> {
        self.tiles.clone()
    }

    fn apply_rect(&mut self, id: &u32, rect: Rect) {
        self.applied.borrow_mut().insert(*id, rect);
    }
}

pub fn ratio_of(r: Rect) -> f64 {
    r.width / r.height
}

pub fn close(a: f64, b: f64, digits: i32) -> bool {
    (a - b).abs() < 10f64.powi(-digits) / 2.0
}
