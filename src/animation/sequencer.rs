//! 阶段序列游标
//!
//! 负责当前阶段、阶段内步数以及三种重复策略下的阶段切换规则。

use super::stage::RepeatPolicy;

/// 往复方向 (仅在 `RepeatPolicy::PingPong` 下有意义)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PingPongDirection {
    Forward,
    Backward,
}

/// 单次推进的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// 仍处于同一阶段
    SameStage,
    /// 阶段结束，游标已移动 (`from == to` 表示单阶段序列停留原地)
    NextStage { from: usize, to: usize },
    /// `RepeatPolicy::None` 下最后一个阶段已结束
    Finished,
}

/// 阶段序列游标
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageSequencer {
    current_stage: usize,
    current_step: u32,
    previous_stage: usize,
    direction: PingPongDirection,
    finished: bool,
}

impl Default for StageSequencer {
    fn default() -> Self {
        Self {
            current_stage: 0,
            current_step: 0,
            previous_stage: 0,
            direction: PingPongDirection::Forward,
            finished: false,
        }
    }
}

impl StageSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_stage(&self) -> usize {
        self.current_stage
    }

    pub fn current_step(&self) -> u32 {
        self.current_step
    }

    pub fn previous_stage(&self) -> usize {
        self.previous_stage
    }

    pub fn direction(&self) -> PingPongDirection {
        self.direction
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// 检测自上次读取以来阶段是否发生变化
    ///
    /// 若 `current_stage != previous_stage`，同步 `previous_stage` 并返回 `true`，
    /// 调用方据此使移动缓存失效。
    pub fn take_stage_change(&mut self) -> bool {
        if self.current_stage != self.previous_stage {
            self.previous_stage = self.current_stage;
            true
        } else {
            false
        }
    }

    /// 当前阶段应用完一步后推进游标
    ///
    /// `duration_steps` 为当前阶段的持续步数，`stage_count` 为序列中的阶段数量。
    pub fn advance(
        &mut self,
        policy: RepeatPolicy,
        stage_count: usize,
        duration_steps: u32,
    ) -> Advance {
        self.current_step += 1;
        if self.current_step < duration_steps {
            return Advance::SameStage;
        }

        self.current_step = 0;
        self.previous_stage = self.current_stage;
        let from = self.current_stage;

        match policy {
            RepeatPolicy::None => {
                if self.current_stage + 1 >= stage_count {
                    self.finished = true;
                    return Advance::Finished;
                }
                self.current_stage += 1;
            }
            RepeatPolicy::Loop => {
                self.current_stage = (self.current_stage + 1) % stage_count;
            }
            RepeatPolicy::PingPong => {
                if stage_count > 1 {
                    self.current_stage = self.ping_pong_next(stage_count);
                }
            }
        }

        Advance::NextStage {
            from,
            to: self.current_stage,
        }
    }

    fn ping_pong_next(&mut self, stage_count: usize) -> usize {
        let next = match self.direction {
            PingPongDirection::Forward => self.current_stage as isize + 1,
            PingPongDirection::Backward => self.current_stage as isize - 1,
        };

        if next < 0 {
            self.direction = PingPongDirection::Forward;
            1
        } else if next as usize >= stage_count {
            self.direction = PingPongDirection::Backward;
            stage_count - 2
        } else {
            next as usize
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 每个阶段持续一步，记录经过的阶段索引
    fn walk(policy: RepeatPolicy, stage_count: usize, boundaries: usize) -> Vec<usize> {
        let mut sequencer = StageSequencer::new();
        let mut visited = vec![sequencer.current_stage()];
        for _ in 0..boundaries {
            if sequencer.advance(policy, stage_count, 1) == Advance::Finished {
                break;
            }
            visited.push(sequencer.current_stage());
        }
        visited
    }

    #[test]
    fn test_step_within_stage() {
        let mut sequencer = StageSequencer::new();
        assert_eq!(sequencer.advance(RepeatPolicy::Loop, 2, 3), Advance::SameStage);
        assert_eq!(sequencer.advance(RepeatPolicy::Loop, 2, 3), Advance::SameStage);
        assert_eq!(sequencer.current_step(), 2);
        assert_eq!(
            sequencer.advance(RepeatPolicy::Loop, 2, 3),
            Advance::NextStage { from: 0, to: 1 }
        );
        assert_eq!(sequencer.current_step(), 0);
        assert_eq!(sequencer.previous_stage(), 0);
    }

    #[test]
    fn test_no_repeat_finishes_after_last_stage() {
        assert_eq!(walk(RepeatPolicy::None, 3, 10), vec![0, 1, 2]);

        let mut sequencer = StageSequencer::new();
        sequencer.advance(RepeatPolicy::None, 1, 1);
        assert!(sequencer.is_finished());
    }

    #[test]
    fn test_loop_wraps() {
        assert_eq!(walk(RepeatPolicy::Loop, 3, 6), vec![0, 1, 2, 0, 1, 2, 0]);
        assert_eq!(walk(RepeatPolicy::Loop, 1, 3), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_ping_pong_walks_back_and_forth() {
        assert_eq!(
            walk(RepeatPolicy::PingPong, 4, 10),
            vec![0, 1, 2, 3, 2, 1, 0, 1, 2, 3, 2]
        );
        assert_eq!(walk(RepeatPolicy::PingPong, 2, 4), vec![0, 1, 0, 1, 0]);
    }

    #[test]
    fn test_ping_pong_single_stage_never_moves() {
        assert_eq!(walk(RepeatPolicy::PingPong, 1, 5), vec![0; 6]);
    }

    #[test]
    fn test_stage_change_detection() {
        let mut sequencer = StageSequencer::new();
        assert!(!sequencer.take_stage_change());

        sequencer.advance(RepeatPolicy::Loop, 2, 1);
        assert_eq!(sequencer.previous_stage(), 0);
        assert!(sequencer.take_stage_change());
        assert_eq!(sequencer.previous_stage(), 1);
        assert!(!sequencer.take_stage_change());
    }
}
