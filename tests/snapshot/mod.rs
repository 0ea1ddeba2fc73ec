mod reset_simulator;
