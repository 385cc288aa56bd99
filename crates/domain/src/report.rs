use super::verdict::Verdict;
use std::collections::VecDeque;

/// Order a batch of verdicts so that DNSSEC failures surface first.
///
/// Verdicts are processed in encounter order; a bogus line is pushed to the
/// front of the result, any other line to the back. Repeated front-insertion
/// means bogus lines come out in *reverse* encounter order while the rest
/// keep their order as a trailing block. The web front end depends on this
/// exact ordering, so the front-insert rule is kept rather than a stable
/// "bogus first" sort.
pub fn order_batch(verdicts: impl IntoIterator<Item = Verdict>) -> Vec<String> {
    let mut lines = VecDeque::new();

    for verdict in verdicts {
        let line = verdict.to_line();
        if verdict.is_bogus() {
            lines.push_front(line);
        } else {
            lines.push_back(line);
        }
    }

    lines.into()
}
