use crate::shared::DisplayState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Variant(usize),
    Infinite,
    Count,
}

// state local to tui: which control has focus and what's typed in the count
// field. loop visibility and current values are synced from DisplayState per loop
#[derive(Clone, Debug)]
pub struct TuiState {
    pub focus: Focus,
    // in-progress count text, None = show the macro's count
    pub count_text: Option<String>,
    // synced from DisplayState each frame
    pub num_variants: usize,
    pub loop_visible: bool,
    pub infinite: bool,
    pub loop_count: Option<u32>,
}

impl Default for TuiState {
    fn default() -> Self {
        Self {
            focus: Focus::Variant(0),
            count_text: None,
            num_variants: 0,
            loop_visible: false,
            infinite: true,
            loop_count: None,
        }
    }
}

impl TuiState {
    pub fn sync(&mut self, ds: &DisplayState) {
        self.num_variants = ds.variants.len();
        self.loop_visible = ds.loop_settings.is_some();
        self.infinite = ds.loop_settings.is_none_or(|l| l.infinite);
        self.loop_count = ds.loop_settings.and_then(|l| l.count);

        // the control we were on may have been hidden by the last change,
        // land back on the active type button
        if !self.focus_ring().contains(&self.focus) {
            let active = ds.variants.iter().find(|v| v.active).map_or(0, |v| v.value.index());
            self.focus = Focus::Variant(active);
            self.count_text = None;
        }
    }

    pub fn focus_ring(&self) -> Vec<Focus> {
        let mut ring: Vec<Focus> = (0..self.num_variants).map(Focus::Variant).collect();
        if self.loop_visible {
            ring.push(Focus::Infinite);
            if !self.infinite {
                ring.push(Focus::Count);
            }
        }
        ring
    }

    // moves focus by `delta` around the ring, returns the focus we left
    pub fn move_focus(&mut self, delta: isize) -> Focus {
        let prev = self.focus;
        let ring = self.focus_ring();
        if ring.is_empty() {
            return prev;
        }
        let pos = ring.iter().position(|f| *f == prev).unwrap_or(0) as isize;
        let next = (pos + delta).rem_euclid(ring.len() as isize) as usize;
        self.focus = ring[next];
        prev
    }
}
