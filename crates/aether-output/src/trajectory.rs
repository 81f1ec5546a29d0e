//! Trajectory writers: one record per processed step.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::Mutex;

use aether_core::units::{EEV, MPC};
use aether_core::Candidate;
use aether_module::Module;

/// Writes every step of every candidate as a 3-D record.
pub struct TrajectoryOutput {
    file: Mutex<BufWriter<File>>,
}

impl TrajectoryOutput {
    /// Create the output file and write the header.
    ///
    /// # Errors
    ///
    /// Any I/O error from creating the file.
    pub fn new<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let mut writer = BufWriter::new(File::create(path)?);
        writer.write_all(
            b"# D\tID\tE\tX\tY\tZ\tPx\tPy\tPz\n\
              #\n\
              # D           Trajectory length [Mpc]\n\
              # ID          Particle type (PDG MC numbering scheme)\n\
              # E           Energy [EeV]\n\
              # X, Y, Z     Position [Mpc]\n\
              # Px, Py, Pz  Heading (unit vector of momentum)\n\
              #\n",
        )?;
        Ok(TrajectoryOutput {
            file: Mutex::new(writer),
        })
    }
}

impl Module for TrajectoryOutput {
    fn name(&self) -> &str {
        "TrajectoryOutput"
    }

    fn process(&self, candidate: &mut Candidate) {
        let pos = candidate.current.position() / MPC;
        let dir = candidate.current.direction();
        let line = format!(
            "{:8.3}\t{}\t{:.4e}\t{:.6}\t{:.6}\t{:.6}\t{:.5}\t{:.5}\t{:.5}\n",
            candidate.trajectory_length() / MPC,
            candidate.current.id(),
            candidate.current.energy() / EEV,
            pos.x,
            pos.y,
            pos.z,
            dir.x,
            dir.y,
            dir.z,
        );
        if let Ok(mut file) = self.file.lock() {
            let _ = file.write_all(line.as_bytes());
            let _ = file.flush();
        }
    }
}

/// Writes every step of every candidate as a 1-D record (`x`, id,
/// energy).
pub struct TrajectoryOutput1D {
    file: Mutex<BufWriter<File>>,
}

impl TrajectoryOutput1D {
    /// Create the output file and write the header.
    ///
    /// # Errors
    ///
    /// Any I/O error from creating the file.
    pub fn new<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let mut writer = BufWriter::new(File::create(path)?);
        writer.write_all(
            b"# X\tID\tE\n\
              #\n\
              # X   Position [Mpc]\n\
              # ID  Particle type\n\
              # E   Energy [EeV]\n\
              #\n",
        )?;
        Ok(TrajectoryOutput1D {
            file: Mutex::new(writer),
        })
    }
}

impl Module for TrajectoryOutput1D {
    fn name(&self) -> &str {
        "TrajectoryOutput1D"
    }

    fn process(&self, candidate: &mut Candidate) {
        let line = format!(
            "{:8.4}\t{}\t{:.4e}\n",
            candidate.current.position().x / MPC,
            candidate.current.id(),
            candidate.current.energy() / EEV,
        );
        if let Ok(mut file) = self.file.lock() {
            let _ = file.write_all(line.as_bytes());
            let _ = file.flush();
        }
    }
}
