// Embedded artifacts generated by the build script from data/answers.txt:
// the answer corpus and the letter position-frequency table.

include!(concat!(env!("OUT_DIR"), "/answers.rs"));
include!(concat!(env!("OUT_DIR"), "/letter_freq.rs"));
