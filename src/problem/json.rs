use std::{fs::File, io::BufReader, io::Read, path::Path};

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize, Serializer};

use crate::{error::IvpError, ConfigurationError, ProblemConfig, Scalar};

// on-disk layout, equation_count is implied by the length of initial_state
#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawProblemConfig<T> {
    initial_state: Vec<T>,
    rtol: T,
    atol: Vec<T>,
    t0: T,
    t1: T,
    tmult: T,
    nout: usize,
}

impl<T: Scalar> From<&ProblemConfig<T>> for RawProblemConfig<T> {
    fn from(p: &ProblemConfig<T>) -> Self {
        Self {
            initial_state: p.initial_state().iter().copied().collect(),
            rtol: p.rtol(),
            atol: p.atol().iter().copied().collect(),
            t0: p.t0(),
            t1: p.t1(),
            tmult: p.tmult(),
            nout: p.nout(),
        }
    }
}

impl<T: Scalar> RawProblemConfig<T> {
    fn validate(self) -> Result<ProblemConfig<T>, ConfigurationError> {
        ProblemConfig::new(
            self.initial_state,
            self.rtol,
            self.atol,
            self.t0,
            self.t1,
            self.tmult,
            self.nout,
        )
    }
}

impl<T: Scalar + Serialize> Serialize for ProblemConfig<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RawProblemConfig::from(self).serialize(serializer)
    }
}

impl<'de, T: Scalar + Deserialize<'de>> Deserialize<'de> for ProblemConfig<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawProblemConfig::<T>::deserialize(deserializer)?;
        raw.validate().map_err(serde::de::Error::custom)
    }
}

impl<T: Scalar + DeserializeOwned> ProblemConfig<T> {
    /// Parse and validate a problem from a JSON document.
    ///
    /// A malformed document is an [IvpError::JsonError], a well-formed one that breaks an invariant of
    /// [ProblemConfig] is an [IvpError::ConfigurationError].
    pub fn from_json_str(s: &str) -> Result<Self, IvpError> {
        let raw: RawProblemConfig<T> = serde_json::from_str(s)?;
        Ok(raw.validate()?)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, IvpError> {
        let raw: RawProblemConfig<T> = serde_json::from_reader(reader)?;
        Ok(raw.validate()?)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, IvpError> {
        let path = path.as_ref();
        log::debug!("loading problem configuration from {}", path.display());
        let file = File::open(path)?;
        Self::from_json_reader(BufReader::new(file))
    }
}

impl<T: Scalar + Serialize> ProblemConfig<T> {
    pub fn to_json_string(&self) -> Result<String, IvpError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use crate::{ConfigurationError, IvpError, ProblemConfig};

    const ROBERTSON_JSON: &str = r#"{
        "initial_state": [1.0, 0.0, 0.0],
        "rtol": 1e-4,
        "atol": [1e-8, 1e-14, 1e-6],
        "t0": 0.0,
        "t1": 0.4,
        "tmult": 10.0,
        "nout": 12
    }"#;

    #[test]
    fn parse_robertson() {
        let p = ProblemConfig::<f64>::from_json_str(ROBERTSON_JSON).unwrap();
        assert_eq!(p, ProblemConfig::robertson());
    }

    #[test]
    fn round_trip() {
        let p = ProblemConfig::<f64>::robertson();
        let s = p.to_json_string().unwrap();
        let q = ProblemConfig::<f64>::from_json_str(&s).unwrap();
        assert_eq!(p, q);
    }

    // xorshift64, positive normal floats from random mantissa and exponent bits
    fn positive_floats(seed: u64) -> impl Iterator<Item = f64> {
        let mut x = seed;
        std::iter::repeat_with(move || {
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            let exponent = 1 + (x >> 52) % 2046;
            f64::from_bits((exponent << 52) | (x & ((1 << 52) - 1)))
        })
    }

    #[test]
    fn round_trip_is_bit_exact() {
        let mut values = positive_floats(0x9e37_79b9_7f4a_7c15);
        for _ in 0..5000 {
            let mut next = || values.next().unwrap();
            let p = ProblemConfig::new(
                vec![next(), next(), next()],
                next(),
                vec![next(), next(), next()],
                next(),
                next(),
                next(),
                12,
            )
            .unwrap();
            let q = ProblemConfig::<f64>::from_json_str(&p.to_json_string().unwrap()).unwrap();
            assert_eq!(p, q);
        }

        let rtol = f64::from_bits(4503775134007188132);
        let p = ProblemConfig::new(vec![1.0], rtol, vec![1e-8], 0.0, 0.4, 10.0, 12).unwrap();
        let q = ProblemConfig::<f64>::from_json_str(&p.to_json_string().unwrap()).unwrap();
        assert_eq!(q.rtol().to_bits(), rtol.to_bits());
    }

    #[test]
    fn invalid_document_is_rejected() {
        let s = ROBERTSON_JSON.replace("[1e-8, 1e-14, 1e-6]", "[1e-8, 1e-14]");
        let err = ProblemConfig::<f64>::from_json_str(&s).unwrap_err();
        assert!(matches!(
            err,
            IvpError::ConfigurationError(ConfigurationError::AbsoluteToleranceLength {
                expected: 3,
                found: 2
            })
        ));

        let s = ROBERTSON_JSON.replace("\"rtol\": 1e-4", "\"rtol\": 0.0");
        let err = ProblemConfig::<f64>::from_json_str(&s).unwrap_err();
        assert!(matches!(
            err,
            IvpError::ConfigurationError(ConfigurationError::NonPositiveRelativeTolerance)
        ));

        let err = ProblemConfig::<f64>::from_json_reader(s.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            IvpError::ConfigurationError(ConfigurationError::NonPositiveRelativeTolerance)
        ));

        let s = ROBERTSON_JSON.replace("\"nout\": 12", "\"nout\": 12, \"neq\": 3");
        let err = ProblemConfig::<f64>::from_json_str(&s).unwrap_err();
        assert!(matches!(err, IvpError::JsonError(_)));
    }

    #[test]
    fn nested_config_is_validated_by_serde() {
        let s = format!("[{}]", ROBERTSON_JSON.replace("\"nout\": 12", "\"nout\": 0"));
        let err = serde_json::from_str::<Vec<ProblemConfig<f64>>>(&s).unwrap_err();
        assert!(err.to_string().contains("Number of output times"));
    }

    #[test]
    fn load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "ivp-problem-json-test-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, ROBERTSON_JSON).unwrap();
        let p = ProblemConfig::<f64>::from_json_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(p.nout(), 12);

        let err = ProblemConfig::<f64>::from_json_file(&path).unwrap_err();
        assert!(matches!(err, IvpError::IoError(_)));
    }
}
