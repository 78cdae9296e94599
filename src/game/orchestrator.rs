use super::*;
use crate::*;
use crate::engine::Prediction;
use crate::memory::Snapshot;
use crate::moves::Card;
use crate::moves::OneHot;
use crate::moves::Variant;
use crate::scoring::Tally;
use std::cell::Cell;

/// Drives rounds end to end for one player.
///
/// Scheduling is single-threaded and cooperative. Training is the only
/// suspension point, and while it runs any further input is dropped rather
/// than queued, so rounds can never interleave or reorder.
pub struct Orchestrator {
    config: Config,
    phase: Cell<Phase>,
    session: tokio::sync::Mutex<Option<Session>>,
    observer: Box<dyn Observer>,
}

impl Orchestrator {
    pub fn new<O>(config: Config, observer: O) -> Result<Self>
    where
        O: Observer + 'static,
    {
        Ok(Self {
            config: config.validate()?,
            phase: Cell::new(Phase::Idle),
            session: tokio::sync::Mutex::new(None),
            observer: Box::new(observer),
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase.get()
    }

    /// setupGame: waits out any round in flight, then drops the old model
    /// before building a new session sized for `k` cards.
    pub async fn setup_game(&self, k: usize) -> Result<()> {
        let variant = Variant::try_from(k)?;
        let mut session = self.session.lock().await;
        drop(session.take());
        *session = Some(Session::new(&self.config, variant)?);
        drop(session);
        log::info!("new {}-card game", variant);
        self.observer.notify(&Event::Setup(variant));
        self.observer.notify(&Event::Ready);
        Ok(())
    }

    /// chooseButton: validates the raw one-hot vector at the boundary.
    pub async fn choose_button(&self, onehot: &OneHot) -> Result<Option<Round>> {
        self.play(|variant| Card::try_from((onehot, variant))).await
    }

    /// Same as `choose_button` for callers that already hold a typed card.
    pub async fn choose(&self, card: Card) -> Result<Option<Round>> {
        self.play(|variant| Card::try_from((card.index(), variant))).await
    }
}

impl Orchestrator {
    async fn play<F>(&self, parse: F) -> Result<Option<Round>>
    where
        F: FnOnce(Variant) -> Result<Card>,
    {
        if self.phase() != Phase::Idle {
            log::debug!("round in flight, dropping input");
            return Ok(None);
        }
        let Ok(mut guard) = self.session.try_lock() else {
            log::debug!("game is being set up, dropping input");
            return Ok(None);
        };
        let Some(session) = guard.as_mut() else {
            log::debug!("model not ready, dropping input");
            return Ok(None);
        };
        let actual = parse(session.variant())?;
        let busy = Busy::from(&self.phase);

        self.phase.set(Phase::Resolving);
        self.observer.notify(&Event::Thinking);
        let resolution = session.resolve(actual)?;
        self.announce(&resolution);

        self.phase.set(Phase::Training);
        let learned = session.learn(&resolution).await;
        drop(busy);
        drop(guard);
        self.observer.notify(&Event::Ready);
        let loss = learned.inspect_err(|e| log::warn!("round abandoned: {}", e))?;
        let round = Round::from((resolution, loss));
        log::debug!("{}", round);
        Ok(Some(round))
    }

    fn announce(&self, resolution: &Resolution) {
        let correct = resolution.correct();
        self.observer.notify(&Event::Reveal(resolution.predicted));
        self.observer.notify(&Event::Round {
            actual: resolution.actual,
            predicted: resolution.predicted,
        });
        self.observer.notify(&Event::Verdict(correct));
        self.observer.notify(&Event::Score {
            delta: resolution.delta,
            total: resolution.total,
        });
        self.observer.notify(&Event::Confidence {
            predicted: resolution.confidence,
            actual: resolution.likelihood,
            correct,
        });
    }
}

impl Orchestrator {
    pub async fn prediction(&self) -> Option<Prediction> {
        self.session
            .lock()
            .await
            .as_ref()
            .map(|s| s.prediction().clone())
    }
    pub async fn snapshot(&self) -> Option<Snapshot> {
        self.session.lock().await.as_ref().map(Session::snapshot)
    }
    pub async fn total(&self) -> Option<Score> {
        self.session.lock().await.as_ref().map(Session::total)
    }
    pub async fn tally(&self) -> Option<Tally> {
        self.session.lock().await.as_ref().map(|s| *s.tally())
    }
    pub async fn variant(&self) -> Option<Variant> {
        self.session.lock().await.as_ref().map(Session::variant)
    }
}

/// Returns the phase to Idle however the round ends.
struct Busy<'a>(&'a Cell<Phase>);

impl<'a> From<&'a Cell<Phase>> for Busy<'a> {
    fn from(phase: &'a Cell<Phase>) -> Self {
        Self(phase)
    }
}

impl Drop for Busy<'_> {
    fn drop(&mut self) {
        self.0.set(Phase::Idle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::Outcome;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    fn config() -> Config {
        Config {
            epochs: 3,
            seed: Some(17),
            ..Config::default()
        }
    }

    fn recorded(config: Config) -> (Orchestrator, Rc<RefCell<Vec<Event>>>) {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        let game = Orchestrator::new(config, move |e: &Event| sink.borrow_mut().push(e.clone()))
            .unwrap();
        (game, events)
    }

    #[tokio::test]
    async fn binary_round_end_to_end() {
        let (game, _) = recorded(config());
        game.setup_game(2).await.unwrap();
        let before = game.prediction().await.expect("prediction after setup");
        let round = game
            .choose_button(&OneHot::from(vec![1., 0.]))
            .await
            .unwrap()
            .expect("round resolves");
        assert_eq!(round.resolution.actual, Card::A);
        assert!(round.resolution.delta == 1 || round.resolution.delta == -1);
        assert_eq!(game.total().await, Some(round.resolution.delta));
        assert_eq!(game.snapshot().await.unwrap().depth(), 10);
        assert_ne!(game.prediction().await.unwrap(), before);
        assert_eq!(game.phase(), Phase::Idle);
    }

    #[tokio::test]
    async fn input_during_training_is_dropped() {
        let (game, events) = recorded(config());
        game.setup_game(2).await.unwrap();
        let a = OneHot::from(vec![1., 0.]);
        let b = OneHot::from(vec![0., 1.]);
        let first = game.choose_button(&a);
        let second = async {
            while game.phase() == Phase::Idle {
                tokio::task::yield_now().await;
            }
            game.choose_button(&b).await
        };
        let (first, second) = tokio::join!(first, second);
        let first = first.unwrap().expect("first round resolves");
        assert!(second.unwrap().is_none());
        assert_eq!(game.total().await, Some(first.resolution.delta));
        assert_eq!(game.tally().await.unwrap().rounds, 1);
        let snapshot = game.snapshot().await.unwrap();
        assert_eq!(snapshot.player().latest(), Some(&Card::A.onehot(Variant::Binary)));
        assert_eq!(snapshot.player().iter().nth(1), Some(&OneHot::zero(2)));
        let rounds = events
            .borrow()
            .iter()
            .filter(|e| matches!(e, Event::Round { .. }))
            .count();
        assert_eq!(rounds, 1);
    }

    #[tokio::test]
    async fn silent_game_keeps_score() {
        let game = Orchestrator::new(config(), Silent).unwrap();
        game.setup_game(3).await.unwrap();
        let round = game.choose(Card::B).await.unwrap().expect("round resolves");
        assert_eq!(game.total().await, Some(round.resolution.delta));
        assert_eq!(game.tally().await.unwrap().rounds, 1);
        assert_eq!(game.variant().await, Some(Variant::Cyclic));
    }

    #[tokio::test]
    async fn input_before_setup_is_dropped() {
        let (game, events) = recorded(config());
        let result = game.choose_button(&OneHot::from(vec![1., 0.])).await;
        assert!(result.unwrap().is_none());
        assert!(events.borrow().is_empty());
        assert!(game.prediction().await.is_none());
    }

    #[tokio::test]
    async fn malformed_move_is_an_error_without_side_effects() {
        let (game, events) = recorded(config());
        game.setup_game(3).await.unwrap();
        events.borrow_mut().clear();
        let before = game.prediction().await;
        for bad in [vec![1., 1., 0.], vec![1., 0.], vec![0., 0., 0.]] {
            let result = game.choose_button(&OneHot::from(bad)).await;
            assert!(matches!(result, Err(Error::InvalidMove { .. })));
        }
        assert!(events.borrow().is_empty());
        assert_eq!(game.total().await, Some(0));
        assert_eq!(game.prediction().await, before);
        assert_eq!(game.phase(), Phase::Idle);
    }

    #[tokio::test]
    async fn third_card_is_invalid_in_binary_game() {
        let (game, _) = recorded(config());
        game.setup_game(2).await.unwrap();
        assert!(matches!(
            game.choose(Card::C).await,
            Err(Error::InvalidIndex { index: 2, variant: 2 })
        ));
    }

    #[tokio::test]
    async fn degenerate_variant_is_rejected() {
        let (game, events) = recorded(config());
        assert!(matches!(game.setup_game(1).await, Err(Error::InvalidVariant(1))));
        assert!(game.variant().await.is_none());
        assert!(events.borrow().is_empty());
    }

    #[tokio::test]
    async fn setup_resets_score_and_memory() {
        let (game, _) = recorded(config());
        game.setup_game(3).await.unwrap();
        for card in [Card::A, Card::B, Card::C] {
            game.choose(card).await.unwrap();
        }
        assert_eq!(game.tally().await.unwrap().rounds, 3);
        game.setup_game(2).await.unwrap();
        assert_eq!(game.variant().await, Some(Variant::Binary));
        assert_eq!(game.total().await, Some(0));
        assert_eq!(game.tally().await.unwrap().rounds, 0);
        assert_eq!(game.prediction().await.unwrap().len(), 2);
        let snapshot = game.snapshot().await.unwrap();
        assert!(snapshot.player().iter().all(|m| m == &OneHot::zero(2)));
    }

    #[tokio::test]
    async fn events_follow_round_order() {
        let (game, events) = recorded(config());
        game.setup_game(3).await.unwrap();
        assert_eq!(*events.borrow(), vec![Event::Setup(Variant::Cyclic), Event::Ready]);
        events.borrow_mut().clear();
        let round = game.choose(Card::B).await.unwrap().unwrap();
        let r = &round.resolution;
        assert_eq!(
            *events.borrow(),
            vec![
                Event::Thinking,
                Event::Reveal(r.predicted),
                Event::Round {
                    actual: Card::B,
                    predicted: r.predicted
                },
                Event::Verdict(r.correct()),
                Event::Score {
                    delta: r.delta,
                    total: r.total
                },
                Event::Confidence {
                    predicted: r.confidence,
                    actual: r.likelihood,
                    correct: r.correct()
                },
                Event::Ready,
            ]
        );
        assert_eq!(r.correct(), r.outcome == Outcome::Caught);
    }

    #[tokio::test]
    async fn timed_out_training_keeps_previous_guess() {
        let (game, events) = recorded(Config {
            epochs: 1_000_000,
            timeout: Some(Duration::from_millis(5)),
            ..config()
        });
        game.setup_game(2).await.unwrap();
        let before = game.prediction().await;
        let result = game.choose(Card::B).await;
        assert!(matches!(result, Err(Error::TrainingTimeout(_))));
        assert_eq!(game.phase(), Phase::Idle);
        assert_eq!(game.prediction().await, before);
        assert!(game
            .snapshot()
            .await
            .unwrap()
            .player()
            .iter()
            .all(|m| m == &OneHot::zero(2)));
        assert_eq!(events.borrow().last(), Some(&Event::Ready));
        assert_eq!(game.tally().await.unwrap().rounds, 1);
    }
}
