use crate::{board::BoardState, movegen::generate_moves_into, types::Move};

/// Node count of the pseudo-legal move tree down to `depth`.
///
/// Branches end early where a king is captured, matching how play stops.
pub fn perft(state: &BoardState, depth: u8) -> u64 {
    fn inner(state: &BoardState, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        if depth == 0 {
            return 1;
        }

        let Some((buf, rest)) = layers.split_first_mut() else {
            return 1;
        };
        generate_moves_into(state, state.side_to_move, buf);

        let mut nodes = 0u64;
        for mv in buf.iter() {
            if depth == 1 || mv.captures_king() {
                nodes += 1;
                continue;
            }
            nodes += inner(&state.apply(mv), depth - 1, rest);
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(64); depth as usize];
    inner(state, depth, &mut layers[..])
}
