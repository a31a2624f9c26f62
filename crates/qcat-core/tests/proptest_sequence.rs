//! Property-based tests for sequence replay and inversion.

use proptest::prelude::*;

use qcat_core::{ElementaryGate, Op, QubitId, Sequence, TraceDevice};

fn arb_op(num_qubits: u32) -> impl Strategy<Value = Op> {
    prop_oneof![
        (prop::sample::select(ElementaryGate::ALL.to_vec()), 0..num_qubits)
            .prop_map(|(gate, q)| Op::gate(gate, QubitId(q))),
        (0..num_qubits, 0..num_qubits)
            .prop_filter("Control and target must differ", |(c, t)| c != t)
            .prop_map(|(c, t)| Op::cnot(QubitId(c), QubitId(t))),
    ]
}

fn arb_sequence() -> impl Strategy<Value = Sequence> {
    prop::collection::vec(arb_op(4), 0..=20).prop_map(Sequence::new)
}

proptest! {
    /// Replay issues exactly the stored steps, in order.
    #[test]
    fn replay_is_verbatim(seq in arb_sequence()) {
        let mut dev = TraceDevice::new();
        seq.replay(&mut dev).unwrap();
        prop_assert_eq!(dev.len(), seq.len());
        prop_assert_eq!(dev.to_sequence(), Some(seq));
    }

    /// Inverting twice gives back the original table.
    #[test]
    fn inverse_is_an_involution(seq in arb_sequence()) {
        prop_assert_eq!(seq.inverse().inverse(), seq);
    }

    /// The inverse mirrors the CNOT skeleton.
    #[test]
    fn inverse_mirrors_cnots(seq in arb_sequence()) {
        let inv = seq.inverse();
        prop_assert_eq!(inv.cnot_count(), seq.cnot_count());
        let forward: Vec<_> = seq.iter().filter(|op| op.is_cnot()).copied().collect();
        let mut backward: Vec<_> = inv.iter().filter(|op| op.is_cnot()).copied().collect();
        backward.reverse();
        prop_assert_eq!(forward, backward);
    }
}
