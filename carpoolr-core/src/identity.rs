use uuid::Uuid;

/// Produce a fresh opaque identifier for a ride or booking.
///
/// Uniqueness is probabilistic: v4 identifiers are drawn from a space large
/// enough that a collision within one store's lifetime is negligible, so no
/// reserved-id registry is kept.
pub fn new_id() -> Uuid {
    Uuid::new_v4()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_distinct() {
        let ids: HashSet<Uuid> = (0..1000).map(|_| new_id()).collect();
        assert_eq!(ids.len(), 1000);
    }
}
