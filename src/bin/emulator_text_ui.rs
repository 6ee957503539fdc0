use clap::Parser;
use crossbeam_channel::{bounded, Receiver, Sender};
use cursive::{CbSink, Cursive};
use log::LevelFilter;
use std::time::{Duration, Instant};
use ux::u4;

use chip8_vm::chip::{
    chip8::{cursive_display::Display, Chip8, Chip8Config, InstructionSet, UnknownOpcodePolicy},
    Chip, ChipWithCursiveDisplay,
};

/// The timers of a CHIP-8 count down at 60 Hz.
const TIMER_PERIOD: Duration = Duration::from_nanos(1_000_000_000 / 60);

/// Run a CHIP-8 program in the terminal.
#[derive(Parser, Debug)]
#[command(name = "emulator_text_ui")]
struct Args {
    /// Path to the program to load.
    rom: String,

    /// Use the COSMAC VIP semantics for shifts, BNNN and FX55/FX65
    /// instead of the SUPER-CHIP ones.
    #[arg(long)]
    cosmac: bool,

    /// Stop the program on an unknown opcode instead of skipping it.
    #[arg(long)]
    abort_on_unknown: bool,

    /// Milliseconds to sleep after each cycle.
    #[arg(long, default_value_t = 1)]
    cycle_delay_ms: u64,

    /// Seed for the random number generator.
    #[arg(long)]
    seed: Option<u64>,

    /// Log every fetched opcode to the debug console (toggle it with `~`).
    #[arg(long)]
    trace: bool,
}

impl Args {
    fn config(&self) -> Chip8Config {
        Chip8Config {
            instruction_set: if self.cosmac {
                InstructionSet::Cosmac
            } else {
                InstructionSet::SuperChip
            },
            unknown_opcodes: if self.abort_on_unknown {
                UnknownOpcodePolicy::Abort
            } else {
                UnknownOpcodePolicy::Continue
            },
            seed: self.seed,
        }
    }
}

/// Represents an event to be processed by the event loop. It is generic
/// over the type representing the pressed key.
enum Event<T> {
    /// Occurs when the key passed in the enum value was pressed.
    Key(T),

    /// Indicates that all keys are released. Terminals only report key
    /// presses, so one key is reserved to release all keys at once.
    KeyRelease,

    /// Decreases the sleep time after each cycle.
    SpeedUp,

    /// Increases the sleep time after each cycle.
    SlowDown,

    /// Shut down.
    Quit,
}

/// Represents the channels available to the event loop. It is generic
/// over the type representing the pressed keys.
struct EventLoopChannels<T> {
    /// The channel to send the UI refresh messages to.
    gfx_sender: CbSink,

    /// The channel on which the Events are received.
    key_receiver: Receiver<Event<T>>,

    /// A channel to report that the thread has completed
    /// shutdown.
    shutdown_sender: Sender<()>,
}

/// The event loop. Constantly loops over (1) process event if there
/// is any. (2) Invoke cycle on the chip. (3) Update the UI. (4) Count
/// down the timers if a timer period has passed. (5) Sleep for the cycle
/// sleep time. (6) Start over.
///
/// Returns the error of the cycle that stopped the chip, if any.
fn event_loop<T, P>(
    mut chip: T,
    io_channels: EventLoopChannels<P>,
    mut cycle_sleep: u64,
) -> Result<(), T::Error>
where
    T: Chip<PinAddress = P> + ChipWithCursiveDisplay,
{
    let mut last_timer_tick = Instant::now();
    loop {
        match io_channels.key_receiver.try_recv() {
            Ok(Event::Key(key)) => {
                chip.set_input_pin(key, true);
            }
            Ok(Event::KeyRelease) => {
                chip.reset_input_pins();
            }
            Ok(Event::Quit) => {
                let _ = io_channels.shutdown_sender.send(());
                return Ok(());
            }
            Ok(Event::SpeedUp) => {
                cycle_sleep = cycle_sleep.saturating_sub(5);
            }
            Ok(Event::SlowDown) => {
                cycle_sleep += 5;
            }
            Err(_) => { /* do nothing */ }
        };

        if let Err(e) = chip.cycle() {
            log::error!("{}", e);
            let _ = io_channels
                .gfx_sender
                .send(Box::new(|s: &mut Cursive| s.quit()));
            return Err(e);
        }
        chip.update_ui(&io_channels.gfx_sender);

        while last_timer_tick.elapsed() >= TIMER_PERIOD {
            chip.tick_timers();
            last_timer_tick += TIMER_PERIOD;
        }

        std::thread::sleep(Duration::from_millis(cycle_sleep));
    }
}

/// Constructs the UI and spawns the event loop and the UI thread.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut chip8 = Chip8::with_config(args.config());
    chip8.load_program(&args.rom)?;

    let mut siv = cursive::default();
    cursive::logger::init();
    log::set_max_level(if args.trace {
        LevelFilter::Trace
    } else {
        LevelFilter::Info
    });

    let cb_sink = siv.cb_sink().clone();
    let (key_sender, key_receiver) = bounded::<Event<u4>>(10);
    let (shutdown_sender, shutdown_receiver) = bounded::<()>(1);
    let cycle_delay = args.cycle_delay_ms;

    let emulator = std::thread::spawn(move || {
        event_loop(
            chip8,
            EventLoopChannels {
                gfx_sender: cb_sink,
                key_receiver,
                shutdown_sender,
            },
            cycle_delay,
        )
    });

    let sender = key_sender.clone();
    siv.add_global_callback(cursive::event::Key::Esc, move |s| {
        // The event loop may already be gone after a fault.
        if sender.send(Event::Quit).is_ok() {
            let _ = shutdown_receiver.recv();
        }
        s.quit();
    });

    for (i, j) in &[
        ('1', 0x1),
        ('2', 0x2),
        ('3', 0x3),
        ('4', 0xC),
        ('q', 0x4),
        ('w', 0x5),
        ('e', 0x6),
        ('r', 0xD),
        ('a', 0x7),
        ('s', 0x8),
        ('d', 0x9),
        ('f', 0xE),
        ('z', 0xA),
        ('x', 0x0),
        ('c', 0xB),
        ('v', 0xF),
    ] {
        let sender = key_sender.clone();
        let key = u4::new(*j);
        siv.add_global_callback(*i, move |_s| {
            let _ = sender.send(Event::Key(key));
        });
    }

    let sender = key_sender.clone();
    siv.add_global_callback(' ', move |_s| {
        let _ = sender.send(Event::KeyRelease);
    });

    let sender = key_sender.clone();
    siv.add_global_callback(cursive::event::Key::Up, move |_s| {
        let _ = sender.send(Event::SpeedUp);
    });

    let sender = key_sender;
    siv.add_global_callback(cursive::event::Key::Down, move |_s| {
        let _ = sender.send(Event::SlowDown);
    });

    siv.add_global_callback('~', Cursive::toggle_debug_console);

    siv.add_layer(Display::default());

    siv.run();

    match emulator.join() {
        Ok(result) => result.map_err(|e| e.into()),
        Err(_) => Err("emulator thread panicked".into()),
    }
}
