use crate::LinkedStack;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeSeq, Serializer};

// A stack serializes as a sequence in pop order, nulls included.
impl<E> Serialize for LinkedStack<E>
where
    E: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(&element)?;
        }
        seq.end()
    }
}

// The first element read is the top, so the sequence is pushed back to front.
impl<'de, E> Deserialize<'de> for LinkedStack<E>
where
    E: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let slots = Vec::<Option<E>>::deserialize(deserializer)?;
        Ok(slots.into_iter().rev().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_in_pop_order() {
        let mut stack = LinkedStack::new();
        stack.push(1);
        stack.push(None);
        stack.push(3);

        assert_eq!(serde_json::to_string(&stack).unwrap(), "[3,null,1]");
    }

    #[test]
    fn test_deserialize_restores_pop_order() {
        let mut stack: LinkedStack<String> = serde_json::from_str(r#"["top", null, "bottom"]"#).unwrap();

        assert_eq!(stack.len(), 3);
        assert_eq!(stack.pop(), Some(String::from("top")));
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.pop(), Some(String::from("bottom")));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_round_trip_keeps_equality() {
        let stack: LinkedStack<u32> = [Some(4), None, Some(6)].into_iter().collect();
        let json = serde_json::to_string(&stack).unwrap();
        let restored: LinkedStack<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, stack);
    }
}
