//! Span volume of the search under an active subscriber.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use strictly_minimax::{Board, Player, PolicyConfig, SeededRng, decide, minimax};
use tracing::span;
use tracing::subscriber::with_default;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// Counts every span the filter lets through.
struct SpanCounter(Arc<AtomicUsize>);

impl<S: tracing::Subscriber> Layer<S> for SpanCounter {
    fn on_new_span(&self, _attrs: &span::Attributes<'_>, _id: &span::Id, _ctx: Context<'_, S>) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }
}

fn spans_during<F: FnOnce()>(filter: &str, f: F) -> usize {
    let count = Arc::new(AtomicUsize::new(0));
    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(filter))
        .with(SpanCounter(Arc::clone(&count)));
    with_default(subscriber, f);
    count.load(Ordering::Relaxed)
}

#[test]
fn test_empty_board_search_opens_one_span_at_info() {
    let spans = spans_during("info", || {
        let result = minimax(&Board::new(), Player::X);
        assert_eq!(result.moves().len(), 9);
    });
    assert_eq!(spans, 1);
}

#[test]
fn test_inner_nodes_stay_silent_at_trace() {
    let b: Board = "X.. .O. ...".parse().unwrap();
    let spans = spans_during("trace", || {
        let _ = minimax(&b, Player::X);
    });
    assert_eq!(spans, 1);
}

#[test]
fn test_decision_span_count_is_bounded() {
    let mut rng = SeededRng::new(1);
    let spans = spans_during("info", || {
        let config = PolicyConfig::all_heuristics();
        decide(&Board::new(), Player::X, &config, &mut rng).unwrap();
    });
    // decide, immediate win, forced block with its nested win check, fork.
    // The fork fires on an empty board, so the search never runs.
    assert_eq!(spans, 5);
}
