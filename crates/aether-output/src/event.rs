//! Conditional event output: records candidates carrying a property.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::Mutex;

use aether_core::units::{EEV, MPC};
use aether_core::Candidate;
use aether_module::Module;

/// Records candidates that carry a given property, once.
///
/// Each matching candidate produces one record of its final and source
/// states; the property is removed afterwards so a later pass over the
/// same candidate cannot emit a duplicate.
pub struct ConditionalOutput {
    file: Mutex<BufWriter<File>>,
    condition: String,
}

impl ConditionalOutput {
    /// Create the output file, recording candidates that carry the
    /// `"Detected"` property.
    ///
    /// # Errors
    ///
    /// Any I/O error from creating the file.
    pub fn new<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Self::with_condition(path, "Detected")
    }

    /// Create the output file with a custom condition property.
    ///
    /// # Errors
    ///
    /// Any I/O error from creating the file.
    pub fn with_condition<P: AsRef<Path>>(path: P, condition: &str) -> io::Result<Self> {
        let mut writer = BufWriter::new(File::create(path)?);
        writer.write_all(
            b"# D\tID\tID0\tE\tE0\tX\tY\tZ\tX0\tY0\tZ0\tPx\tPy\tPz\tP0x\tP0y\tP0z\tz\n\
              #\n\
              # D           Trajectory length [Mpc]\n\
              # ID          Particle type (PDG MC numbering scheme)\n\
              # E           Energy [EeV]\n\
              # X, Y, Z     Position [Mpc]\n\
              # Px, Py, Pz  Heading (unit vector of momentum)\n\
              # z           Redshift\n\
              # Initial state: ID0, E0, ...\n\
              #\n",
        )?;
        Ok(ConditionalOutput {
            file: Mutex::new(writer),
            condition: condition.to_owned(),
        })
    }
}

impl Module for ConditionalOutput {
    fn name(&self) -> &str {
        "ConditionalOutput"
    }

    fn process(&self, candidate: &mut Candidate) {
        if !candidate.has_property(&self.condition) {
            return;
        }
        // Consume the marker so a later pass cannot record a duplicate.
        candidate.remove_property(&self.condition);

        let pos = candidate.current.position() / MPC;
        let src_pos = candidate.source.position() / MPC;
        let dir = candidate.current.direction();
        let src_dir = candidate.source.direction();
        let line = format!(
            "{:8.3}\t{}\t{}\t{:.4e}\t{:.4e}\t\
             {:.4}\t{:.4}\t{:.4}\t{:.4}\t{:.4}\t{:.4}\t\
             {:.5}\t{:.5}\t{:.5}\t{:.5}\t{:.5}\t{:.5}\t{:.6}\n",
            candidate.trajectory_length() / MPC,
            candidate.current.id(),
            candidate.source.id(),
            candidate.current.energy() / EEV,
            candidate.source.energy() / EEV,
            pos.x,
            pos.y,
            pos.z,
            src_pos.x,
            src_pos.y,
            src_pos.z,
            dir.x,
            dir.y,
            dir.z,
            src_dir.x,
            src_dir.y,
            src_dir.z,
            candidate.redshift(),
        );
        if let Ok(mut file) = self.file.lock() {
            let _ = file.write_all(line.as_bytes());
            let _ = file.flush();
        }
    }
}
