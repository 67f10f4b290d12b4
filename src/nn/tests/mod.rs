mod adadelta;
