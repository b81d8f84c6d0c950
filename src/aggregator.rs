use anyhow::Result;
use log::{debug, error};

use crate::app_config::Config;
use crate::classifier;
use crate::document_model::TranscriptDocument;
use crate::metadata;
use crate::protocol::{Protocol, ProtocolType, Sentence};
use crate::sentence;
use crate::speaker_name;

// @module: Speech aggregation state machine and protocol assembly

/// The chair title marker; the first accepted announcement must contain it
const CHAIR_MARKER: &str = "יו\"ר";

/// Aggregation state while walking the paragraph sequence
#[derive(Debug)]
enum SpeakerState {
    /// No speaker recognized yet; content is discarded
    NoSpeaker,
    /// Inside a speaker's turn, accumulating speech paragraphs
    InSpeech {
        speaker: String,
        /// True while the speaker is an interjection label; buffered
        /// content is never emitted
        ignored: bool,
        buffer: Vec<String>,
    },
}

/// Walks a document's paragraphs and assembles the protocol output
pub struct ProtocolAssembler<'a> {
    config: &'a Config,
}

impl<'a> ProtocolAssembler<'a> {
    pub fn new(config: &'a Config) -> Self {
        ProtocolAssembler { config }
    }

    /// Produce a Protocol from a loaded document.
    ///
    /// Speaker announcements partition the paragraph sequence into speech
    /// blocks; each block is flushed into sentences when the next
    /// announcement is accepted and once more at end of input. The very
    /// first accepted announcement must carry the chair marker; content
    /// before it is unattributed preamble and is dropped.
    pub fn assemble(
        &self,
        document: &TranscriptDocument,
        protocol_name: &str,
        knesset_number: u32,
        protocol_type: ProtocolType,
    ) -> Protocol {
        let protocol_number = metadata::extract_protocol_number(&document.paragraphs);
        let mut protocol = Protocol::new(
            protocol_name.to_string(),
            knesset_number,
            protocol_type,
            protocol_number,
        );

        let mut state = SpeakerState::NoSpeaker;

        for paragraph in &document.paragraphs {
            let classified = classifier::classify_paragraph(paragraph, &document.styles);

            let accept_announcement = classified.is_speaker_line()
                && (matches!(state, SpeakerState::InSpeech { .. })
                    || classified.text.contains(CHAIR_MARKER));

            if accept_announcement {
                self.flush(&mut protocol, &state);

                let span = classified.speaker_span.as_deref().unwrap_or("");
                let name = speaker_name::extract_speaker_name(span, &self.config.name_rules);
                let ignored = self.config.name_rules.interjection_labels.contains(&name);
                debug!("Speaker announcement: '{}' (ignored: {})", name, ignored);
                state = SpeakerState::InSpeech {
                    speaker: name,
                    ignored,
                    buffer: Vec::new(),
                };
            } else if let SpeakerState::InSpeech {
                ignored: false,
                buffer,
                ..
            } = &mut state
            {
                if !classified.text.is_empty() {
                    buffer.push(classified.text);
                }
            }
        }

        // Flush the final speaker's speech
        self.flush(&mut protocol, &state);

        protocol
    }

    /// Flush a buffered speech block into sentences; a failure is recovered
    /// at the granularity of this single block.
    fn flush(&self, protocol: &mut Protocol, state: &SpeakerState) {
        let SpeakerState::InSpeech {
            speaker,
            ignored: false,
            buffer,
        } = state
        else {
            return;
        };
        if speaker.is_empty() || buffer.is_empty() {
            return;
        }

        if let Err(e) = self.process_speech(protocol, speaker, buffer) {
            error!("Error processing speech for speaker {}: {}", speaker, e);
        }
    }

    /// Turn one speaker's accumulated paragraphs into tokenized sentences
    fn process_speech(
        &self,
        protocol: &mut Protocol,
        speaker: &str,
        speech_paragraphs: &[String],
    ) -> Result<()> {
        let speech_text = speech_paragraphs.join(" ");
        let speech_text = sentence::normalize_dashes(&speech_text);

        for segment in sentence::segment_sentences(&speech_text) {
            if !sentence::is_valid_sentence(&segment) {
                continue;
            }
            let tokens = sentence::tokenize_sentence(&segment);
            if tokens.len() >= self.config.min_sentence_tokens {
                protocol
                    .sentences
                    .push(Sentence::new(speaker.to_string(), tokens.join(" ")));
            }
        }

        Ok(())
    }
}
