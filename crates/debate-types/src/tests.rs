#[cfg(test)]
mod tests {
    use crate::config::*;
    use crate::error::*;
    use crate::event::*;
    use crate::persona::*;
    use crate::protocol::*;
    use crate::session::*;
    use crate::summary::*;
    use crate::turn::*;

    // ─── Turn Tests ──────────────────────────────────────────

    #[test]
    fn test_turn_full_payload() {
        let json = r#"{
            "session_id": "session-1",
            "persona_id": "gen_z",
            "persona_name": "Gen Z Skeptic",
            "text": "No way.",
            "wave": 2,
            "sentiment": "negative",
            "confidence_score": 0.8,
            "is_rebuttal": true,
            "is_complete": false,
            "timestamp": "2024-01-01T00:00:00"
        }"#;
        let turn: DebateTurn = serde_json::from_str(json).unwrap();
        assert_eq!(turn.session_id, "session-1");
        assert_eq!(turn.persona_id, "gen_z");
        assert_eq!(turn.persona_name, "Gen Z Skeptic");
        assert_eq!(turn.wave, 2);
        assert_eq!(turn.sentiment, Some(Sentiment::Negative));
        assert_eq!(turn.confidence_score, Some(0.8));
        assert!(turn.is_rebuttal);
        assert!(!turn.is_final);
    }

    #[test]
    fn test_turn_wave_defaults_to_one() {
        let turn: DebateTurn = serde_json::from_str(r#"{"persona_id": "a"}"#).unwrap();
        assert_eq!(turn.wave, 1);

        let turn: DebateTurn = serde_json::from_str(r#"{"persona_id": "a", "wave": null}"#).unwrap();
        assert_eq!(turn.wave, 1);

        let turn: DebateTurn = serde_json::from_str(r#"{"persona_id": "a", "wave": 0}"#).unwrap();
        assert_eq!(turn.wave, 1);
    }

    #[test]
    fn test_turn_lenient_sentiment() {
        let turn: DebateTurn =
            serde_json::from_str(r#"{"persona_id": "a", "sentiment": null}"#).unwrap();
        assert!(turn.sentiment.is_none());

        let turn: DebateTurn =
            serde_json::from_str(r#"{"persona_id": "a", "sentiment": ""}"#).unwrap();
        assert!(turn.sentiment.is_none());

        let turn: DebateTurn =
            serde_json::from_str(r#"{"persona_id": "a", "sentiment": 0.7}"#).unwrap();
        assert!(turn.sentiment.is_none());

        let turn: DebateTurn =
            serde_json::from_str(r#"{"persona_id": "a", "sentiment": "mixed"}"#).unwrap();
        assert_eq!(turn.sentiment, Some(Sentiment::Mixed));
    }

    #[test]
    fn test_turn_final_flag_wire_name() {
        let turn = DebateTurn {
            is_final: true,
            ..DebateTurn::new("a", "")
        };
        let json = serde_json::to_value(&turn).unwrap();
        assert_eq!(json["is_complete"], true);
        assert!(json.get("is_final").is_none());
    }

    #[test]
    fn test_turn_builders() {
        let turn = DebateTurn::new("a", "hi")
            .with_wave(0)
            .with_sentiment(Sentiment::Positive)
            .rebuttal();
        assert_eq!(turn.wave, 1);
        assert_eq!(turn.sentiment, Some(Sentiment::Positive));
        assert!(turn.is_rebuttal);
    }

    #[test]
    fn test_sentiment_parse_and_str() {
        for s in ["positive", "negative", "neutral", "mixed"] {
            assert_eq!(Sentiment::parse(s).unwrap().as_str(), s);
        }
        assert!(Sentiment::parse("  ").is_none());
    }

    #[test]
    fn test_sentiment_keeps_unrecognised_labels() {
        let turn: DebateTurn =
            serde_json::from_str(r#"{"persona_id": "a", "sentiment": "angry"}"#).unwrap();
        assert_eq!(turn.sentiment, Some(Sentiment::Other("angry".to_string())));

        let upper = Sentiment::parse("Positive").unwrap();
        assert_ne!(upper, Sentiment::Positive);
        assert_eq!(upper.as_str(), "Positive");

        let json = serde_json::to_value(&turn).unwrap();
        assert_eq!(json["sentiment"], "angry");
    }

    // ─── Protocol Tests ──────────────────────────────────────

    #[test]
    fn test_start_command_wire_shape() {
        let cmd = OutboundCommand::start(
            "Is remote work here to stay?",
            vec!["a".to_string(), "b".to_string()],
            DebateMode::Hybrid,
        );
        let value: serde_json::Value = serde_json::from_str(&cmd.encode().unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "action": "start",
                "question": "Is remote work here to stay?",
                "persona_ids": ["a", "b"],
                "mode": "hybrid"
            })
        );
    }

    #[test]
    fn test_decode_debate_response() {
        let msg = InboundMessage::decode(
            r#"{"type": "debate_response", "data": {"persona_id": "a", "text": "hi", "wave": 3}}"#,
        )
        .unwrap();
        match msg {
            InboundMessage::DebateResponse { data } => {
                assert_eq!(data.persona_id, "a");
                assert_eq!(data.text, "hi");
                assert_eq!(data.wave, 3);
            }
            other => panic!("Expected DebateResponse, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_debate_complete_short_shape() {
        let msg = InboundMessage::decode(
            r#"{"type": "debate_complete", "data": {"summary": "Debate completed successfully", "share_url": "/replay/s1"}}"#,
        )
        .unwrap();
        match msg {
            InboundMessage::DebateComplete { data } => {
                assert_eq!(data.summary_text, "Debate completed successfully");
                assert_eq!(data.share_url.as_deref(), Some("/replay/s1"));
                assert_eq!(
                    serde_json::to_value(&data).unwrap(),
                    serde_json::json!({"summary": "Debate completed successfully", "share_url": "/replay/s1"})
                );
            }
            other => panic!("Expected DebateComplete, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_debate_complete_full_shape_keeps_unknown_fields() {
        let msg = InboundMessage::decode(
            r#"{"type": "debate_complete", "data": {
                "session_id": "s1",
                "summary_text": "Split room",
                "sentiment_breakdown": {"positive": 2, "negative": 1, "neutral": 0, "mixed": 1},
                "key_insights": ["cost"],
                "consensus_points": [],
                "most_controversial_take": "ban it",
                "share_url": "/replay/s1",
                "viral_score": 7
            }}"#,
        )
        .unwrap();
        let InboundMessage::DebateComplete { data } = msg else {
            panic!("Expected DebateComplete");
        };
        assert_eq!(data.summary_text, "Split room");
        assert_eq!(data.sentiment_breakdown.unwrap().total(), 4);
        assert_eq!(data.key_insights, vec!["cost".to_string()]);
        assert_eq!(data.most_controversial_take.as_deref(), Some("ban it"));
        assert_eq!(data.raw()["viral_score"], 7);
    }

    #[test]
    fn test_decode_debate_complete_tolerates_bad_fields() {
        let msg = InboundMessage::decode(
            r#"{"type": "debate_complete", "data": {
                "summary": "done",
                "share_url": "/replay/x",
                "key_insights": null,
                "consensus_points": "none",
                "most_controversial_take": {"persona": "a", "text": "ban it"},
                "sentiment_breakdown": "mostly positive"
            }}"#,
        )
        .unwrap();
        let InboundMessage::DebateComplete { data } = msg else {
            panic!("Expected DebateComplete");
        };
        assert_eq!(data.summary_text, "done");
        assert_eq!(data.share_url.as_deref(), Some("/replay/x"));
        assert!(data.key_insights.is_empty());
        assert!(data.consensus_points.is_empty());
        assert!(data.most_controversial_take.is_none());
        assert!(data.sentiment_breakdown.is_none());
        assert_eq!(data.raw()["most_controversial_take"]["persona"], "a");
    }

    #[test]
    fn test_decode_debate_complete_without_object_payload() {
        for frame in [
            r#"{"type": "debate_complete", "data": null}"#,
            r#"{"type": "debate_complete"}"#,
            r#"{"type": "debate_complete", "data": "finished"}"#,
        ] {
            let msg = InboundMessage::decode(frame).unwrap();
            let InboundMessage::DebateComplete { data } = msg else {
                panic!("Expected DebateComplete for {}", frame);
            };
            assert!(data.summary_text.is_empty());
        }
    }

    #[test]
    fn test_decode_error_envelope() {
        let msg = InboundMessage::decode(r#"{"type": "error", "message": "engine down"}"#).unwrap();
        assert_eq!(
            msg,
            InboundMessage::Error {
                message: "engine down".to_string()
            }
        );
    }

    #[test]
    fn test_decode_unknown_type_is_ignored_variant() {
        let msg = InboundMessage::decode(r#"{"type": "typing_indicator", "data": {"x": 1}}"#).unwrap();
        assert_eq!(msg, InboundMessage::Unknown);
    }

    #[test]
    fn test_decode_malformed() {
        assert!(matches!(
            InboundMessage::decode("not json"),
            Err(DebateError::Protocol(_))
        ));
        assert!(InboundMessage::decode(r#"{"data": {}}"#).is_err());
    }

    // ─── Summary Tests ───────────────────────────────────────

    #[test]
    fn test_sentiment_tally() {
        let turns = vec![
            DebateTurn::new("a", "").with_sentiment(Sentiment::Positive),
            DebateTurn::new("b", "").with_sentiment(Sentiment::Positive),
            DebateTurn::new("c", "").with_sentiment(Sentiment::Mixed),
            DebateTurn::new("d", ""),
            DebateTurn::new("e", "").with_sentiment(Sentiment::Other("sarcastic".to_string())),
        ];
        let tally = SentimentBreakdown::tally(&turns);
        assert_eq!(tally.positive, 2);
        assert_eq!(tally.mixed, 1);
        assert_eq!(tally.negative, 0);
        assert_eq!(tally.other, 1);
        assert_eq!(tally.total(), 4);
    }

    // ─── Persona Tests ───────────────────────────────────────

    #[test]
    fn test_persona_catalog_decode() {
        let json = r#"{"personas": [
            {"id": "boomer", "name": "Boomer Dad", "category": "demographic",
             "description": "d", "speaking_style": "s", "avatar_url": "/personas/boomer.png",
             "is_premium": false},
            {"id": "vc", "name": "VC", "category": "professional"}
        ], "total": 2}"#;
        let catalog: PersonaCatalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.personas.len(), 2);
        assert_eq!(catalog.total, Some(2));
        assert_eq!(catalog.personas[0].avatar_url.as_deref(), Some("/personas/boomer.png"));
        assert!(!catalog.personas[1].is_premium);
        assert!(catalog.personas[1].slug.is_empty());
    }

    // ─── Session Tests ───────────────────────────────────────

    #[test]
    fn test_new_session_id_is_unique_and_prefixed() {
        let a = new_session_id();
        let b = new_session_id();
        assert!(a.starts_with("session-"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_debate_session_new_is_pending() {
        let session = DebateSession::new("s1", "q", vec!["a".to_string()], DebateMode::Parallel);
        assert_eq!(session.status, SessionStatus::Pending);
        assert!(!session.created_at.is_empty());
    }

    #[test]
    fn test_status_and_mode_serialization() {
        assert_eq!(serde_json::to_string(&SessionStatus::Failed).unwrap(), r#""failed""#);
        assert_eq!(serde_json::to_string(&DebateMode::Sequential).unwrap(), r#""sequential""#);
        assert_eq!(DebateMode::default(), DebateMode::Hybrid);
    }

    // ─── Config Tests ────────────────────────────────────────

    #[test]
    fn test_config_default_urls() {
        let config = ClientConfig::default();
        assert_eq!(config.catalog_url(), "http://localhost:8000/api/personas");
        assert_eq!(config.stream_url("s1"), "ws://localhost:8000/ws/debate/s1");
    }

    #[test]
    fn test_config_from_partial_json() {
        let config = ClientConfig::from_json(r#"{"ws_base": "wss://example.com/"}"#).unwrap();
        assert_eq!(config.stream_url("s1"), "wss://example.com/ws/debate/s1");
        assert_eq!(config.api_base, "http://localhost:8000");
        assert_eq!(config.mode, DebateMode::Hybrid);
    }

    #[test]
    fn test_config_rejects_bad_input() {
        assert!(matches!(
            ClientConfig::from_json("{"),
            Err(DebateError::Config(_))
        ));
        assert!(matches!(
            ClientConfig::from_json(r#"{"ws_base": " "}"#),
            Err(DebateError::Config(_))
        ));
    }

    // ─── Error / Event Tests ─────────────────────────────────

    #[test]
    fn test_error_display() {
        assert_eq!(DebateError::NotConnected.to_string(), "Not connected to server");
        assert_eq!(
            DebateError::Validation("Please enter a question".to_string()).to_string(),
            "Please enter a question"
        );
    }

    #[test]
    fn test_error_from_serde() {
        let err: DebateError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert!(matches!(err, DebateError::Serialization(_)));
    }

    #[test]
    fn test_debate_event_equality() {
        assert_eq!(
            DebateEvent::SpeakerFinished { persona_id: "a".to_string() },
            DebateEvent::SpeakerFinished { persona_id: "a".to_string() }
        );
        assert_ne!(TransportEvent::Opened, TransportEvent::Closed);
    }
}
