#[cfg(test)]
mod tests {

    use std::error::Error;

    use ron;
    use rs_wordle_engine::*;

    #[test]
    fn constraint_state_serde() -> Result<(), Box<dyn Error>> {
        let mut engine = Engine::from_words("abcd", vec!["abcd", "aacb", "aacd", "abce"], false)?;
        engine.guess("aacb", true);

        let ser = ron::to_string(engine.state())?;
        let deser = ron::from_str::<ConstraintState>(&ser)?;

        assert_eq!(&deser, engine.state());
        let c = Letter::try_from('c')?;
        assert!(deser.is_known(c, 2));
        Ok(())
    }

    #[test]
    fn word_encoding_serde() -> Result<(), Box<dyn Error>> {
        let encoding = WordEncoding::new("assay")?;

        let ser = ron::to_string(&encoding)?;
        let deser = ron::from_str::<WordEncoding>(&ser)?;

        assert_eq!(deser, encoding);
        assert_eq!(deser.count(Letter::try_from('s')?), 2);
        Ok(())
    }
}
