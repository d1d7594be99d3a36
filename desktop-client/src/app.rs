use std::time::Instant;

use eframe::egui;
use ringbuffer::{AllocRingBuffer, RingBuffer};
use snake_common::{log_debug, InputQueue, SnakeGame, SnakeSettings, TickOutcome};

use crate::clock::TickClock;
use crate::input::EguiInputMapper;
use crate::render::{self, RenderContext};

const RECENT_SCORES: usize = 5;

pub struct SnakeApp {
    game: SnakeGame,
    queue: InputQueue,
    mapper: EguiInputMapper,
    render: RenderContext,
    clock: TickClock,
    recent_scores: AllocRingBuffer<u32>,
}

impl SnakeApp {
    pub fn new(settings: &SnakeSettings, render: RenderContext) -> Self {
        Self {
            game: SnakeGame::new(settings),
            queue: InputQueue::new(),
            mapper: EguiInputMapper::new(),
            render,
            clock: TickClock::new(settings.tick_interval, Instant::now()),
            recent_scores: AllocRingBuffer::new(RECENT_SCORES),
        }
    }

    fn handle_input(&mut self, ctx: &egui::Context) {
        for command in self.mapper.collect_commands(ctx) {
            self.queue.push(command);
        }

        if self.queue.take_restart() && self.game.restart() {
            self.queue.clear();
            self.clock.reset(Instant::now());
        }
    }

    fn advance(&mut self, now: Instant) {
        for _ in 0..self.clock.due_ticks(now) {
            match self.game.tick(self.queue.take_heading()) {
                TickOutcome::Moved | TickOutcome::Grew => {}
                TickOutcome::GameOver(reason) => {
                    log_debug!("Round ended by {:?}", reason);
                    self.recent_scores.enqueue(self.game.score());
                    break;
                }
                TickOutcome::NotPlaying => break,
            }
        }
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        let now = Instant::now();
        self.advance(now);

        let snapshot = self.game.snapshot();
        let recent: Vec<u32> = self.recent_scores.iter().copied().collect();
        egui::CentralPanel::default().show(ctx, |ui| {
            render::draw_game(ui, &self.render, &snapshot, &recent);
        });

        if snapshot.status.is_playing() {
            ctx.request_repaint_after(self.clock.until_next(now));
        }
    }
}
