//! Product facts for the `--info` printout: what the Virtual Mouse
//! controller does, how its pipeline is staged, and where the project is
//! headed. The demo in this crate simulates only the tracking view; the
//! numbers below describe the real controller.

// ════════════════════════════════════════════════════════════════════════════
// Product
// ════════════════════════════════════════════════════════════════════════════

pub const PRODUCT:  &str = "Virtual Mouse";
pub const TAGLINE:  &str = "Control Your Computer With Just Your Hands";
pub const SUMMARY:  &str = "AI-powered Virtual Mouse using real-time computer vision and \
                            gesture recognition. No hardware needed — just your webcam.";
pub const CREATOR:      &str = "Mayank Sharma";
pub const CREATOR_LINK: &str = "github.com/Mayank-iitj";

// ════════════════════════════════════════════════════════════════════════════
// Features
// ════════════════════════════════════════════════════════════════════════════

pub struct Feature {
    pub title:  &'static str,
    pub detail: &'static str,
}

pub const FEATURES: [Feature; 6] = [
    Feature {
        title:  "Hand Tracking",
        detail: "21-point hand landmark detection with sub-pixel precision using MediaPipe neural networks.",
    },
    Feature {
        title:  "Cursor Control",
        detail: "Smooth, responsive cursor movement mapped from hand position to full screen coordinates.",
    },
    Feature {
        title:  "Click & Scroll Gestures",
        detail: "Pinch to click, vertical finger drag to scroll — natural, intuitive gesture mappings.",
    },
    Feature {
        title:  "Real-Time Performance",
        detail: "30+ FPS processing with <33ms end-to-end latency. No GPU required — runs on CPU.",
    },
    Feature {
        title:  "Accessibility Friendly",
        detail: "Enables computer control for users with motor disabilities or limited hand mobility.",
    },
    Feature {
        title:  "Cross-Platform Ready",
        detail: "Works on Windows, macOS, and Linux. Requires only Python and a standard webcam.",
    },
];

// ════════════════════════════════════════════════════════════════════════════
// Pipeline
// ════════════════════════════════════════════════════════════════════════════

/// One stage of the controller's frame pipeline, webcam to OS.
pub struct PipelineStage {
    pub number:       &'static str,
    pub title:        &'static str,
    pub detail:       &'static str,
    pub metric:       &'static str,
    pub metric_label: &'static str,
}

pub const PIPELINE: [PipelineStage; 5] = [
    PipelineStage {
        number:       "01",
        title:        "Webcam Input",
        detail:       "Captures real-time video frames from any standard webcam at 30+ FPS.",
        metric:       "30 FPS",
        metric_label: "Capture Rate",
    },
    PipelineStage {
        number:       "02",
        title:        "Hand Landmark Detection",
        detail:       "MediaPipe Hands detects 21 3D landmarks on each hand with sub-pixel accuracy.",
        metric:       "21",
        metric_label: "Landmarks",
    },
    PipelineStage {
        number:       "03",
        title:        "Gesture Classification",
        detail:       "Interprets landmark positions to classify gestures: point, pinch, scroll, and more.",
        metric:       "<5ms",
        metric_label: "Classification",
    },
    PipelineStage {
        number:       "04",
        title:        "Coordinate Mapping",
        detail:       "Normalizes hand coordinates to screen space with smoothing interpolation.",
        metric:       "1:1",
        metric_label: "Mapping Ratio",
    },
    PipelineStage {
        number:       "05",
        title:        "OS Mouse Control",
        detail:       "Sends mouse events directly to the operating system for seamless integration.",
        metric:       "<1ms",
        metric_label: "OS Latency",
    },
];

// ════════════════════════════════════════════════════════════════════════════
// Roadmap
// ════════════════════════════════════════════════════════════════════════════

pub struct Milestone {
    pub phase:  &'static str,
    pub title:  &'static str,
    pub detail: &'static str,
    pub status: &'static str,
}

pub const ROADMAP: [Milestone; 5] = [
    Milestone {
        phase:  "Phase 1",
        title:  "Multi-Hand Gestures",
        detail: "Support for simultaneous two-hand tracking, enabling more complex gesture vocabularies and bimanual interactions.",
        status: "In Progress",
    },
    Milestone {
        phase:  "Phase 2",
        title:  "Gesture Customization",
        detail: "User-defined gesture mapping — assign any hand pose to any computer action through an intuitive configuration UI.",
        status: "Planned",
    },
    Milestone {
        phase:  "Phase 3",
        title:  "ML-Based Gesture Learning",
        detail: "Train the system to recognize new gestures on-the-fly using few-shot learning and user demonstrations.",
        status: "Research",
    },
    Milestone {
        phase:  "Phase 4",
        title:  "AR/VR Integration",
        detail: "Extend gesture control to spatial computing environments — mixed reality headsets and holographic interfaces.",
        status: "Vision",
    },
    Milestone {
        phase:  "Phase 5",
        title:  "Mobile & Edge Devices",
        detail: "Optimize for mobile processors and edge AI chips — on-device inference for IoT and embedded systems.",
        status: "Vision",
    },
];

// ════════════════════════════════════════════════════════════════════════════
// Printers
// ════════════════════════════════════════════════════════════════════════════

/// One-line product pitch for the launch banner.
pub fn print_summary() {
    println!("  {} — {}", PRODUCT, TAGLINE);
    println!("  {}", SUMMARY);
}

/// Full product sheet, printed by `--info`.
pub fn print_info() {
    print_summary();

    println!();
    println!("  Features");
    for f in &FEATURES {
        println!("    {:<24} {}", f.title, f.detail);
    }

    println!();
    println!("  Pipeline (webcam → OS mouse)");
    for s in &PIPELINE {
        println!("    {} {:<24} {}", s.number, s.title, s.detail);
        println!("       {:>21}: {}", s.metric_label, s.metric);
    }

    println!();
    println!("  Roadmap");
    for m in &ROADMAP {
        println!("    {} {:<26} [{:<11}] {}", m.phase, m.title, m.status, m.detail);
    }

    println!();
    println!("  Created by {} ({})", CREATOR, CREATOR_LINK);
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
