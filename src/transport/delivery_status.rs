use crate::domain::MessageId;

pub fn encode_delivery_status_query(message_id: &MessageId) -> Vec<(String, String)> {
    vec![(MessageId::FIELD.to_owned(), message_id.as_str().to_owned())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_delivery_status_query_params() {
        let id = MessageId::new("xeqd6rrd26").unwrap();
        assert_eq!(
            encode_delivery_status_query(&id),
            vec![("message_id".to_owned(), "xeqd6rrd26".to_owned())]
        );
    }
}
